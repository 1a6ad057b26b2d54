use crate::block::BlockRecord;
use crate::session::Session;
use proptest::prelude::*;

prop_compose! {
    /// A noisy linear signal: random trend plus bounded jitter, so that both
    /// formula and raw blocks show up.
    fn arb_signal()(
        count in 0usize..200,
        base in -500.0f32..500.0,
        trend in -5.0f32..5.0,
    )(
        jitter in prop::collection::vec(-1.0f32..1.0, count),
        base in Just(base),
        trend in Just(trend),
    ) -> Vec<f32> {
        jitter.iter().enumerate()
            .map(|(i, j)| base + trend * i as f32 + j)
            .collect()
    }
}

proptest! {
    /// Property: formula blocks reconstruct within tolerance, raw blocks exactly.
    #[test]
    fn prop_roundtrip_within_tolerance(
        readings in arb_signal(),
        block_size in 1usize..32,
        tolerance in 0.0f32..1.5,
    ) {
        let mut session = Session::new(block_size, tolerance).unwrap();
        let records = session.compress(&readings).unwrap();
        let decoded = session.decompress(&records);
        prop_assert_eq!(decoded.len(), readings.len());

        let mut offset = 0;
        for record in &records {
            let len = record.len_hint().unwrap_or(block_size);
            for i in offset..offset + len {
                let err = (decoded[i] - readings[i]).abs();
                match record {
                    BlockRecord::Formula { .. } => {
                        prop_assert!(
                            err <= tolerance,
                            "reading {} off by {} (tolerance {})", i, err, tolerance
                        );
                    }
                    BlockRecord::Raw { .. } => {
                        prop_assert_eq!(err, 0.0);
                    }
                }
            }
            offset += len;
        }
    }

    /// Property: streaming one reading at a time yields the batch records.
    #[test]
    fn prop_streaming_equals_batch(
        readings in arb_signal(),
        block_size in 1usize..32,
        tolerance in 0.0f32..1.5,
    ) {
        let mut batch = Session::new(block_size, tolerance).unwrap();
        let batch_records = batch.compress(&readings).unwrap();

        let mut stream = Session::new(block_size, tolerance).unwrap();
        let mut stream_records = Vec::new();
        for &value in &readings {
            stream.add_reading(value).unwrap();
            if stream.block_ready() {
                stream_records.push(stream.get_block().unwrap());
            }
        }
        prop_assert!(stream.pending() < block_size);
        if let Some(tail) = stream.flush().unwrap() {
            stream_records.push(tail);
        }

        prop_assert_eq!(&batch_records, &stream_records);
        prop_assert_eq!(batch.stats(), stream.stats());
    }

    /// Property: statistics stay consistent with the emitted records.
    #[test]
    fn prop_stats_consistency(
        first in arb_signal(),
        second in arb_signal(),
        block_size in 1usize..32,
    ) {
        let mut session = Session::new(block_size, 0.5).unwrap();
        let mut records = session.compress(&first).unwrap();
        records.extend(session.compress(&second).unwrap());

        let stats = *session.stats();
        let raw_readings: u64 = records
            .iter()
            .filter_map(|r| r.len_hint())
            .map(|len| len as u64)
            .sum();

        prop_assert_eq!(stats.total_blocks(), records.len() as u64);
        prop_assert_eq!(stats.total_readings, (first.len() + second.len()) as u64);
        prop_assert_eq!(stats.original_size, stats.total_readings * 4);
        prop_assert_eq!(
            stats.compressed_size,
            8 * stats.blocks_compressed + 4 * raw_readings
        );
    }
}
