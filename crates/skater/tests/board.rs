use skater::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

struct Player {
    rect: Polygon,
}

impl Hitbox for Player {
    fn hitbox(&self) -> &Polygon {
        &self.rect
    }

    fn hitbox_mut(&mut self) -> &mut Polygon {
        &mut self.rect
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tile {
    Ground,
    Crate,
    Wall,
}

fn level() -> GameBoard<Obstacle<Tile>> {
    GameBoard::new(vec![
        Obstacle::placed(rectangle((0., 0.), (200., 20.)), 0., 100., Tile::Ground),
        Obstacle::placed(rectangle((0., 0.), (20., 20.)), 60., 80., Tile::Crate),
        Obstacle::placed(rectangle((0., 0.), (10., 100.)), -30., 0., Tile::Wall),
    ])
}

#[test]
fn test_player_on_ground_between_crate_and_wall() {
    init_tracing();
    let board = level();
    let player = Player {
        rect: rectangle((10., 70.), (30., 90.)),
    };

    let under: Vec<Tile> = board.obstacles_under(&player).map(|o| *o.data()).collect();
    assert_eq!(under, vec![Tile::Ground]);

    let right: Vec<Tile> = board.obstacles_right(&player).map(|o| *o.data()).collect();
    assert_eq!(right, vec![Tile::Crate]);

    let left: Vec<Tile> = board.obstacles_left(&player).map(|o| *o.data()).collect();
    assert_eq!(left, vec![Tile::Wall]);

    assert_eq!(board.limit_under(&player), 10.);
    assert_eq!(board.limit_right(&player), 29.);
    assert_eq!(board.limit_left(&player), -29.);
}

#[test]
fn test_movement_tick_stops_at_crate() {
    init_tracing();
    let board = level();
    let mut player = Player {
        rect: rectangle((10., 70.), (30., 90.)),
    };

    for _ in 0..10 {
        let limits = board.limits(&player);
        let dx = limits.clamp_dx(8.);
        let dy = limits.clamp_dy(4.);
        player.hitbox_mut().translate(&Vector::new(dx, dy));
    }

    // one pixel short of the crate's left side, resting on the ground
    assert_eq!(player.hitbox().right(), 59.);
    assert_eq!(player.hitbox().bottom(), 100.);
    assert_eq!(board.limit_right(&player), 0.);
    assert_eq!(board.limit_under(&player), 0.);
}

#[test]
fn test_board_config_from_json() {
    init_tracing();
    let config = BoardConfig::from_json(r#"{ "clearance_margin": 2 }"#).unwrap();
    let board = GameBoard::with_config(
        vec![Obstacle::new(rectangle((50., 0.), (60., 10.)), ())],
        config,
    );
    let player = rectangle((0., 0.), (10., 10.));

    assert_eq!(board.limit_right(&player), 38.);
    assert_eq!(board.limit_left(&player), MIN_POSITION);
}
