use hucha::{Board, BoardBuilder};

fn main() {
    // a 600 goal over three days comes out as 50 + 50 + 500, shuffled into
    // display order by the fixed seed
    let mut board = BoardBuilder::with_target(600, 3)
        .columns(3)
        .seed(7)
        .build()
        .unwrap();

    board.toggle_saved(0).unwrap();
    println!("{}", board);

    let snapshot = board.to_json().unwrap();
    let restored = Board::from_json(&snapshot).unwrap();
    assert_eq!(restored, board);

    board.reset_progress();
    println!("{}", board);
}
