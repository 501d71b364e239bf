#![feature(test)]

extern crate test;

use rs_wordle_engine::*;
use test::Bencher;

#[bench]
fn bench_score_correct(b: &mut Bencher) {
    b.iter(|| score("FAVOR", "FAVOR"))
}

#[bench]
fn bench_score_partial(b: &mut Bencher) {
    b.iter(|| score("SAGAS", "ABASE"))
}

#[bench]
fn bench_play_full_game(b: &mut Bencher) {
    let guesses = ["SKILL", "SMILE", "THORN", "ABASE", "SAVOR", "GUESS"];
    b.iter(|| {
        let mut next = guesses.iter();
        play::<WordleError, _, _, _>(
            "FAVOR",
            || Ok(*next.next().unwrap_or(&"FAVOR")),
            |_| Ok(()),
        )
    })
}
