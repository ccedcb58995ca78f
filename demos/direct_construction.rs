//! Builds a small knowledge base by hand (no simulator involved) and
//! walks through the classic inference of spec §8, S1: a Breeze at
//! (1,1) plus the cave's structural axioms rules out a pit next door
//! once (2,1) is independently known safe.

use wumpus_agent::knowledge_base::KnowledgeBase;
use wumpus_agent::types::domain::{ObjectKind, PerceptKind, Position};

fn main() {
    let mut kb = KnowledgeBase::new(3);

    kb.update_percept(Position::new(1, 1), &[PerceptKind::Breeze])
        .expect("telling the KB about a well-formed percept cannot fail");

    let pit_at_2_1 = kb.symbol_for(ObjectKind::Pit, Position::new(2, 1));
    println!(
        "Before visiting (1,2): KB ⊨ Pit(2,1)? {}",
        kb.ask(&pit_at_2_1, 1000).unwrap()
    );

    // Visiting (1,2) and finding it pit-free pins the pit to (2,1),
    // since the Breeze ⇔ Pit(1,2) ∨ Pit(2,1) axiom forces one of the
    // two neighbors of (1,1) to be dangerous.
    kb.update_percept(Position::new(1, 2), &[]).unwrap();

    println!(
        "After visiting (1,2) pit-free: KB ⊨ Pit(2,1)? {}",
        kb.ask(&pit_at_2_1, 1000).unwrap()
    );

    let clauses: Vec<String> = kb.clauses().iter().map(|c| c.to_sentence().formula()).collect();
    println!("\nFull clause set ({} clauses):", clauses.len());
    for formula in clauses {
        println!("  {formula}");
    }
}
