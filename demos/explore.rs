//! A scripted episode on a 4×4 board, driven the way the surrounding game
//! would drive the knowledge base: feed the percept at the agent's cell,
//! then read verdicts to see where it is provably safe to step next.
//!
//! The hidden world has the wumpus at (2, 2) and a pit at (0, 3). The
//! knowledge base is told neither --- only what the agent senses.

use wumpus_kb::{
    config::Config,
    grid::Coordinate,
    kb::{Classification, KnowledgeBase},
    symbols::Sensation,
};

fn print_board(kb: &KnowledgeBase) {
    for y in 0..kb.dimensions().height {
        let row = (0..kb.dimensions().width)
            .map(|x| {
                match kb
                    .classify(Coordinate::new(x, y))
                    .expect("coordinate is on the board")
                {
                    Classification::Unknown => '?',
                    Classification::Visited => '.',
                    Classification::ProvenSafe => '+',
                    Classification::ProvenHazard => '!',
                }
            })
            .collect::<String>();
        println!("  {row}");
    }
}

fn main() {
    let mut kb = KnowledgeBase::new(4, 4, Config::default());

    let walk: Vec<(Coordinate, Vec<Sensation>)> = vec![
        (Coordinate::new(0, 0), vec![]),
        (Coordinate::new(1, 0), vec![]),
        (Coordinate::new(2, 0), vec![]),
        (Coordinate::new(2, 1), vec![Sensation::Stench]),
        (Coordinate::new(1, 1), vec![]),
        (Coordinate::new(1, 2), vec![Sensation::Stench]),
    ];

    for (position, sensations) in walk {
        kb.observe(position, &sensations)
            .expect("the scripted percepts are consistent");

        let percept = kb
            .percept(position)
            .expect("coordinate is on the board")
            .expect("the cell was just observed");
        println!("at {position}, sensing {percept}:");
        print_board(&kb);

        let frontier = kb
            .safe_unvisited_neighbors(position)
            .expect("coordinate is on the board");
        match frontier.is_empty() {
            true => println!("  no proven-safe step from here\n"),
            false => {
                let listed = frontier
                    .iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  proven-safe steps: {listed}\n");
            }
        }
    }

    println!("legend: ? unknown, . visited, + proven safe, ! proven hazard");
}
