//! Helpers for inspecting generated modules.
//!
//! A generated module is TypeScript, but each exported constant is a plain
//! JSON array, so it can be read back with serde_json.

use trialgen_core::{Bucket, Trial};

/// Parse every `export const NAME: Type[] = [...];` back into trials, in
/// emission order.
pub fn parse_module(module: &str) -> Vec<(String, Vec<Trial>)> {
    module
        .split("export const ")
        .skip(1)
        .map(|section| {
            let (name, rest) = section
                .split_once(':')
                .unwrap_or_else(|| panic!("no type annotation after {section:?}"));
            let (_, literal) = rest
                .split_once(" = ")
                .unwrap_or_else(|| panic!("no initializer for {name}"));

            let mut stream = serde_json::Deserializer::from_str(literal).into_iter::<Vec<Trial>>();
            let trials = stream
                .next()
                .unwrap_or_else(|| panic!("empty initializer for {name}"))
                .unwrap_or_else(|e| panic!("{name} is not a trial array: {e}"));
            let tail = &literal[stream.byte_offset()..];
            assert!(
                tail.starts_with(";\n\n"),
                "{name} must end with `;` and a blank line, got {:?}",
                &tail[..tail.len().min(10)]
            );
            (name.to_string(), trials)
        })
        .collect()
}

/// Assert the generated module holds exactly `expected` trials per bucket.
pub fn assert_bucket_counts(module: &str, expected: [usize; 4]) {
    let sections = parse_module(module);
    let actual: Vec<(String, usize)> = sections
        .iter()
        .map(|(name, trials)| (name.clone(), trials.len()))
        .collect();
    let wanted: Vec<(String, usize)> = Bucket::ALL
        .iter()
        .zip(expected)
        .map(|(b, n)| (b.const_name(), n))
        .collect();
    pretty_assertions::assert_eq!(actual, wanted);
}
