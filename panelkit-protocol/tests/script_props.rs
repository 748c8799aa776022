use panelkit_protocol::script::{LONG_DELAY, LONG_DELAY_MS};
use panelkit_protocol::{Script, ScriptError, ScriptReader, DELAY_FLAG};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = (u8, Vec<u8>, Option<u8>)> {
    (
        any::<u8>(),
        proptest::collection::vec(any::<u8>(), 0..=127),
        proptest::option::of(any::<u8>()),
    )
}

fn encode(records: &[(u8, Vec<u8>, Option<u8>)]) -> Vec<u8> {
    let mut bytes = vec![records.len() as u8];
    for (command, args, delay) in records {
        bytes.push(*command);
        let flag = if delay.is_some() { DELAY_FLAG } else { 0 };
        bytes.push(args.len() as u8 | flag);
        bytes.extend_from_slice(args);
        if let Some(d) = delay {
            bytes.push(*d);
        }
    }
    bytes
}

proptest! {
    #[test]
    fn parser_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        for record in ScriptReader::new(&bytes) {
            let _ = record;
        }
    }

    #[test]
    fn records_stay_aligned(records in proptest::collection::vec(record_strategy(), 0..24)) {
        let bytes = encode(&records);
        let parsed: Vec<_> = Script::new(&bytes)
            .records()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        prop_assert_eq!(parsed.len(), records.len());
        for (got, (command, args, delay)) in parsed.iter().zip(records.iter()) {
            prop_assert_eq!(got.command, *command);
            prop_assert_eq!(got.args, args.as_slice());
            let expected = delay.map(|d| if d == LONG_DELAY { LONG_DELAY_MS } else { d as u16 });
            prop_assert_eq!(got.delay_ms, expected);
        }
    }

    #[test]
    fn truncation_is_reported(
        records in proptest::collection::vec(record_strategy(), 1..8),
        cut in 1usize..64,
    ) {
        let bytes = encode(&records);
        let keep = bytes.len().saturating_sub(cut).max(1);
        prop_assume!(keep < bytes.len());

        let result = Script::new(&bytes[..keep]).validate();
        let is_truncated = matches!(result, Err(ScriptError::Truncated { .. }));
        prop_assert!(is_truncated);
    }
}
