use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_types::{Color, Piece, PieceKind, Square};
use plum_rules::game_state::game_state::GameState;
use plum_rules::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    side_to_move: Color,
    /// Kings and rooks that may still castle.
    castling_ready: &'static [&'static str],
    expected_nodes: &'static [u64],
}

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
const STARTPOS_CASTLERS: &[&str] = &["a1", "e1", "h1", "a8", "e8", "h8"];
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8";

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS,
        side_to_move: Color::White,
        castling_ready: STARTPOS_CASTLERS,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        placement: KIWIPETE,
        side_to_move: Color::White,
        castling_ready: STARTPOS_CASTLERS,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        placement: ROOK_ENDGAME,
        side_to_move: Color::White,
        castling_ready: &[],
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        placement: STARTPOS,
        side_to_move: Color::White,
        castling_ready: STARTPOS_CASTLERS,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        placement: KIWIPETE,
        side_to_move: Color::White,
        castling_ready: STARTPOS_CASTLERS,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        placement: ROOK_ENDGAME,
        side_to_move: Color::White,
        castling_ready: &[],
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    BenchCase {
        name: "position_4",
        placement: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R",
        side_to_move: Color::Black,
        castling_ready: &["a1", "e1", "h1"],
        expected_nodes: &[6, 264, 9467],
    },
    BenchCase {
        name: "position_6",
        placement: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
        side_to_move: Color::White,
        castling_ready: &[],
        expected_nodes: &[46, 2079, 89_890],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("RULES_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

/// Piece placement with rank 8 first, as in the first field of a FEN record.
fn board_from_placement(placement: &str, castling_ready: &[&str]) -> Board {
    let mut board = Board::empty();
    for (rank, row) in placement.split('/').enumerate() {
        let mut file = 0u8;
        for ch in row.chars() {
            if let Some(skip) = ch.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let kind = PieceKind::from_letter(ch).expect("placement letter should be a piece");
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let sq = Square::new(file, rank as u8).expect("placement should fit the board");
            let mut piece = Piece::new(kind, color);
            if matches!(kind, PieceKind::King | PieceKind::Rook)
                && !castling_ready.contains(&sq.to_string().as_str())
            {
                piece = piece.moved();
            }
            board.set(sq, Some(piece));
            file += 1;
        }
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let board = board_from_placement(case.placement, case.castling_ready);
        let game = GameState::from_position(board, case.side_to_move, None);

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&bench_game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
