//! Laws every backend must uphold. Each is instantiated once per backend in `mod.rs`.

use super::types::{gen_batch, Batch, Event, Record};
use crate::helpers::backend::{encode_with, Backend, Strict};
use crate::helpers::decode::{decode_all, Decode};
use anyhow::Result;
use bytegen_encode::{encode_bytes, encode_sequence, Encode};
use bytegen_sink::{Sink, WORD_WIDTH};
use itertools::Itertools;
use rand::Rng;
use std::fmt::Debug;

const RANDOM_ROUNDS: usize = 200;

fn word(n: usize) -> Vec<u8> {
    n.to_ne_bytes().to_vec()
}

fn round_trip<B, T>(value: &T) -> Result<()>
where
    B: Backend,
    T: Encode + Decode + PartialEq + Debug,
{
    let bytes = encode_with::<B, T>(value)?;
    assert_eq!(bytes.len(), value.encoded_len()?);
    let back = decode_all::<T>(&bytes)?;
    assert_eq!(&back, value);
    Ok(())
}

pub fn scalars_round_trip<B: Backend>() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_ROUNDS {
        round_trip::<B, u8>(&rng.gen())?;
        round_trip::<B, i8>(&rng.gen())?;
        round_trip::<B, bool>(&rng.gen())?;
        round_trip::<B, char>(&rng.gen())?;
        round_trip::<B, u16>(&rng.gen())?;
        round_trip::<B, i16>(&rng.gen())?;
        round_trip::<B, u32>(&rng.gen())?;
        round_trip::<B, i32>(&rng.gen())?;
        round_trip::<B, u64>(&rng.gen())?;
        round_trip::<B, i64>(&rng.gen())?;
        round_trip::<B, usize>(&rng.gen())?;
        round_trip::<B, isize>(&rng.gen())?;
    }
    for x in [u64::MIN, 1, u64::MAX] {
        round_trip::<B, u64>(&x)?;
    }
    round_trip::<B, char>(&char::MAX)?;
    Ok(())
}

pub fn fixed_width_host_order<B: Backend>() -> Result<()> {
    assert_eq!(encode_with::<B, _>(&1u32)?, 1u32.to_ne_bytes().to_vec());
    assert_eq!(encode_with::<B, _>(&0u64)?.len(), 8);
    assert_eq!(encode_with::<B, _>(&u64::MAX)?.len(), 8);
    assert_eq!(encode_with::<B, _>(&-1i16)?, vec![0xFF, 0xFF]);
    assert_eq!(encode_with::<B, _>(&7usize)?, word(7));

    #[cfg(target_endian = "little")]
    assert_eq!(encode_with::<B, _>(&0x0102_0304u32)?, vec![4, 3, 2, 1]);
    #[cfg(target_endian = "big")]
    assert_eq!(encode_with::<B, _>(&0x0102_0304u32)?, vec![1, 2, 3, 4]);
    Ok(())
}

pub fn explicit_orders<B: Backend>() -> Result<()> {
    let mut s = B::sink();
    s.write_u16_le(0x0102)?;
    s.write_u32_be(0x0304_0506)?;
    s.write_u64_le(0x0708)?;
    let bytes = B::into_bytes(s)?;
    assert_eq!(bytes, vec![2, 1, 3, 4, 5, 6, 8, 7, 0, 0, 0, 0, 0, 0]);
    Ok(())
}

pub fn record_scenario<B: Backend>() -> Result<()> {
    let rec = Record { id: 5, flag: true };
    assert_eq!(encode_with::<B, _>(&rec)?, vec![0x05, 0x01]);
    round_trip::<B, Record>(&rec)
}

pub fn product_is_concatenation<B: Backend>() -> Result<()> {
    let rec = Record { id: 9, flag: false };
    let pair = (rec.clone(), 300u16);
    let expected = [encode_with::<B, _>(&rec)?, encode_with::<B, _>(&300u16)?].concat();
    assert_eq!(encode_with::<B, _>(&pair)?, expected);
    Ok(())
}

/// Pins the tag bytes of a three-variant enum, nested to the right.
pub fn sum_tags_are_pinned<B: Backend>() -> Result<()> {
    assert_eq!(encode_with::<B, _>(&Event::Started)?, vec![0]);

    let moved = Event::Moved { dx: -1, dy: 2 };
    let expected = [vec![1, 0], (-1i32).to_ne_bytes().to_vec(), 2i32.to_ne_bytes().to_vec()]
        .concat();
    assert_eq!(encode_with::<B, _>(&moved)?, expected);

    let renamed = Event::Renamed("ab".into(), None);
    let expected = [vec![1, 1], word(2), b"ab".to_vec(), vec![0]].concat();
    assert_eq!(encode_with::<B, _>(&renamed)?, expected);
    Ok(())
}

pub fn sequence_law<B: Backend>() -> Result<()> {
    let empty: Vec<Record> = vec![];
    assert_eq!(encode_with::<B, _>(&empty)?, word(0));

    let recs = (0..4u8).map(|id| Record { id, flag: id % 2 == 0 }).collect_vec();
    let mut expected = word(recs.len());
    for rec in recs.iter() {
        expected.extend(encode_with::<Strict, _>(rec)?);
    }
    assert_eq!(encode_with::<B, _>(&recs)?, expected);
    assert_eq!(encode_with::<B, _>(recs.as_slice())?, expected);

    let mut s = B::sink();
    encode_sequence(&mut s, recs.iter().rev(), |rec, s| rec.encode(s))?;
    let reversed = B::into_bytes(s)?;
    assert_eq!(reversed.len(), expected.len());
    assert_eq!(&reversed[..WORD_WIDTH], &expected[..WORD_WIDTH]);
    assert_eq!(&reversed[WORD_WIDTH..WORD_WIDTH + 2], &[3, 0]);
    Ok(())
}

pub fn bytes_match_sequence_of_u8<B: Backend>() -> Result<()> {
    let raw = (0..=255u8).collect_vec();
    let mut s = B::sink();
    encode_bytes(&mut s, &raw)?;
    assert_eq!(B::into_bytes(s)?, encode_with::<B, _>(&raw)?);
    Ok(())
}

pub fn optional_law<B: Backend>() -> Result<()> {
    assert_eq!(encode_with::<B, _>(&None::<Record>)?, vec![0]);

    let rec = Record { id: 2, flag: true };
    let expected = [vec![1], encode_with::<B, _>(&rec)?].concat();
    assert_eq!(encode_with::<B, _>(&Some(rec))?, expected);
    Ok(())
}

pub fn nested_values_round_trip<B: Backend>() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_ROUNDS {
        let batch = gen_batch(&mut rng);
        round_trip::<B, Batch>(&batch)?;
    }
    round_trip::<B, Vec<Option<(u16, String)>>>(&vec![None, Some((1, "é".into())), None])?;
    Ok(())
}

/// The bytes depend on the value alone, never on the backend that carries them.
pub fn backends_agree<B: Backend>() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_ROUNDS {
        let batch = gen_batch(&mut rng);
        assert_eq!(encode_with::<B, _>(&batch)?, batch.encode_to_vec()?);
    }
    Ok(())
}

pub fn flush_is_invisible<B: Backend>() -> Result<()> {
    let rec = Record { id: 1, flag: true };
    let mut s = B::sink();
    rec.encode(&mut s)?;
    s.flush()?;
    s.flush()?;
    rec.encode(&mut s)?;
    s.write_chunks([&[][..], &[7u8, 8][..]])?;
    assert_eq!(B::into_bytes(s)?, vec![1, 1, 1, 1, 7, 8]);
    Ok(())
}
