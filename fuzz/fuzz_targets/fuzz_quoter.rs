#![no_main]

use libfuzzer_sys::fuzz_target;
use tracegraph::{SourceQuoter, Styler};

fuzz_target!(|input: (String, String, [u8; 4], u8, bool)| {
    let (source, prefix, [start_line, start_col, end_line, end_col], max_lines, color) = input;
    if let Ok(quoter) = SourceQuoter::new(source.as_str(), Styler::new(color)) {
        let lines = quoter.quote(
            &prefix,
            start_line.into(),
            start_col.into(),
            end_line.into(),
            end_col.into(),
            max_lines.into(),
        );
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|line| line.starts_with(&prefix)));
    }
});
