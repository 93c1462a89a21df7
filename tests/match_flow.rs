use lib_tessera::prelude::*;

fn options(seed: u64) -> MatchOptions {
    MatchOptions {
        log_level: None,
        players: 2,
        width: 15,
        height: 15,
        forbid_enclaves: false,
        allow_reinforce: false,
        no_split: false,
        seed: Some(seed),
        metric: DistanceMetric::Manhattan,
    }
}

#[test]
fn a_seeded_match_plays_the_whole_bag() {
    let report = MatchRunner::new(options(42)).run().unwrap();

    assert_eq!(report.totals.len(), 2);
    assert_eq!(report.placed + report.discarded, 60);
    assert!(report.placed > 30, "too many discards: {}", report.discarded);

    // the end-of-game sweep lifts every token off the board
    assert!(report.free_tokens.iter().all(|&t| t == STARTING_TOKENS));
}

#[test]
fn seeded_matches_are_reproducible() {
    let first = MatchRunner::new(options(977)).run().unwrap();
    let second = MatchRunner::new(options(977)).run().unwrap();
    assert_eq!(first.totals, second.totals);
    assert_eq!(first.placed, second.placed);
}

#[test]
fn a_shared_keep_splits_or_pays_in_full() {
    // two single-keep tiles held by different players, merged by a wide keep
    // between them.
    let catalog = Catalog::new().unwrap();
    let rules = RulesConfig { width: 5, height: 5, ..RulesConfig::default() };

    let build = || {
        let mut board = Board::new(&catalog, &rules);
        let b2 = catalog.find("B2").unwrap();
        let b7 = catalog.find("B7").unwrap();
        board.force_place(Coord::new(0, 1), Tile::rotated(b2, Rotation::R180));
        board.force_place(Coord::new(1, 0), Tile::rotated(b2, Rotation::R90));
        board.place_token(Coord::new(0, 1), Position::South, 0);
        board.place_token(Coord::new(1, 0), Position::East, 1);
        board.force_place(Coord::new(1, 1), Tile::rotated(b7, Rotation::R0));
        board
    };

    let mut board = build();
    let pattern = board.pattern_containing(Coord::new(1, 1), Position::Center).unwrap();
    assert_eq!(pattern.kind(), PatternKind::Keep);
    assert_eq!(pattern.spots().len(), 3);
    assert_eq!(pattern.banners(), 1);
    assert!(!pattern.is_complete());
    // 3 spots x1 open, +1 for the open banner
    assert_eq!(pattern.score(), 4);
    assert_eq!(pattern.dominant().len(), 2);

    let mut players = Player::roster(2);
    let mut split = pattern.clone();
    split.disburse(&mut board, &mut players, true);
    assert_eq!(players[0].score_for(PatternKind::Keep), 2);
    assert_eq!(players[1].score_for(PatternKind::Keep), 2);
    assert!(board.tile_at(Coord::new(0, 1)).unwrap().token().is_none());

    let mut board = build();
    let mut players = Player::roster(2);
    let mut full = board.pattern_containing(Coord::new(1, 1), Position::Center).unwrap();
    full.disburse(&mut board, &mut players, false);
    assert_eq!(players[0].score_for(PatternKind::Keep), 4);
    assert_eq!(players[1].score_for(PatternKind::Keep), 4);
}
