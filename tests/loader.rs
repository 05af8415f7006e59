// Copyright 2017 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use bitstrm::{Accumulator, ByteView, ChunkLoader, Error, LoadStrategy};

const DATA: [u8; 11] = [
    0x80, 0xA0, 0xA8, 0xAA, 0x40, 0x50, 0x54, 0x55, 0xFF, 0x00, 0x18,
];

/*the (width, value) of every chunk until the loader runs dry*/
fn chunks(view: ByteView, strategy: LoadStrategy) -> Vec<(u32, u64)> {
    let mut loader = ChunkLoader::with_strategy(view, strategy);
    let mut acc = Accumulator::new();
    let mut chunks = Vec::new();

    while loader.reload(&mut acc).is_ok() {
        let width = acc.len();
        chunks.push((width, acc.take(width)));
    }
    assert_eq!(loader.remaining(), 0);
    chunks
}

#[test]
fn test_widest_chunks() {
    assert_eq!(
        chunks(ByteView::new(&DATA), LoadStrategy::Widest),
        vec![(64, 0x80A0_A8AA_4050_5455), (16, 0xFF00), (8, 0x18)]
    );

    /*a 64-bit chunk then an 8-bit one*/
    assert_eq!(
        chunks(ByteView::new(&DATA[..9]), LoadStrategy::Widest),
        vec![(64, 0x80A0_A8AA_4050_5455), (8, 0xFF)]
    );

    assert_eq!(
        chunks(ByteView::new(&DATA[..7]), LoadStrategy::Widest),
        vec![(32, 0x80A0_A8AA), (16, 0x4050), (8, 0x54)]
    );

    assert_eq!(chunks(ByteView::new(&[]), LoadStrategy::Widest), vec![]);
}

#[test]
fn test_truncated_chunks() {
    /*a chunk is only as wide as the logical bits left*/
    let view = ByteView::with_bits(b"\xAA\x55\xA5\xFE", 31).unwrap();
    assert_eq!(
        chunks(view, LoadStrategy::Widest),
        vec![(16, 0xAA55), (8, 0xA5), (7, 0x7F)]
    );

    let view = ByteView::with_bits(&DATA, 64 + 5).unwrap();
    assert_eq!(
        chunks(view, LoadStrategy::Widest),
        vec![(64, 0x80A0_A8AA_4050_5455), (5, 0x1F)]
    );

    let view = ByteView::with_bits(&DATA, 0).unwrap();
    assert_eq!(chunks(view, LoadStrategy::Widest), vec![]);
}

#[test]
fn test_bytewise_chunks() {
    let expected: Vec<(u32, u64)> = DATA.iter().map(|b| (8, u64::from(*b))).collect();
    assert_eq!(chunks(ByteView::new(&DATA), LoadStrategy::Bytewise), expected);

    let view = ByteView::with_bits(b"\xAA\x55\xA5\xFE", 31).unwrap();
    assert_eq!(
        chunks(view, LoadStrategy::Bytewise),
        vec![(8, 0xAA), (8, 0x55), (8, 0xA5), (7, 0x7F)]
    );
}

#[test]
fn test_exhausted_reload() {
    let mut loader = ChunkLoader::new(ByteView::new(b"\x12\x34"));
    let mut acc = Accumulator::new();

    assert!(loader.reload(&mut acc).is_ok());
    assert_eq!(loader.cursor(), 2);
    assert_eq!(acc.take(4), 0x1);

    /*a failed reload touches nothing*/
    let before = acc;
    assert_eq!(loader.reload(&mut acc), Err(Error::Exhausted));
    assert_eq!(loader.cursor(), 2);
    assert_eq!(loader.remaining(), 0);
    assert_eq!(acc, before);
}

#[test]
fn test_oversized_view() {
    assert_eq!(
        ByteView::with_bits(b"\x12\x34", 17).err(),
        Some(Error::SizeTooLarge {
            size: 17,
            available: 16
        })
    );
    assert_eq!(ByteView::with_bits(b"\x12\x34", 16).unwrap().len_bits(), 16);
    assert_eq!(ByteView::new(b"\x12\x34").fetch::<2>(1), None);
    assert_eq!(ByteView::new(b"\x12\x34").fetch::<1>(1), Some([0x34]));
}

#[test]
fn test_reload_keeps_unread_bits() {
    let mut loader = ChunkLoader::new(ByteView::new(b"\x12\x34\x56\x78"));
    let mut acc = Accumulator::new();

    assert!(loader.reload(&mut acc).is_ok());
    assert_eq!(acc.take(4), 0x1);

    /*nothing is loaded over bits not yet taken*/
    assert!(loader.reload(&mut acc).is_ok());
    assert_eq!(acc.len(), 28);
    assert_eq!(loader.cursor(), 4);
    assert_eq!(acc.take(28), 0x2345678);

    assert_eq!(loader.reload(&mut acc), Err(Error::Exhausted));
}
