// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The unliteration transform.
//!
//! One pass over the literate source produces a definition view and an
//! implementation view. Each input line yields exactly one line in each
//! output, so line numbers reported by the compiler for either derived file
//! point back at the same line of the literate source.

use crate::classify::PrefixTable;
use std::io::{self, BufRead, Write};

/// The two views produced from one literate document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unliterated {
    /// Lines of the definition module.
    pub definition: Vec<String>,
    /// Lines of the implementation module.
    pub implementation: Vec<String>,
}

impl Unliterated {
    /// The definition module as file contents, every line `\n`-terminated.
    pub fn definition_text(&self) -> String {
        join_lines(&self.definition)
    }

    /// The implementation module as file contents, every line `\n`-terminated.
    pub fn implementation_text(&self) -> String {
        join_lines(&self.implementation)
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Unliterates a sequence of lines held in memory.
pub fn unliterate<'a, I>(lines: I, prefixes: &PrefixTable) -> Unliterated
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Unliterated::default();
    for line in lines {
        let kind = prefixes.classify(line);
        out.definition.push(kind.definition_line());
        out.implementation.push(kind.implementation_line());
    }
    out
}

/// Where a streaming unliteration failed.
#[derive(Debug)]
pub enum StreamError {
    /// Reading the literate source failed (including invalid UTF-8).
    Read(io::Error),
    /// Writing the definition output failed.
    Definition(io::Error),
    /// Writing the implementation output failed.
    Implementation(io::Error),
}

/// Streams a literate source into two writers, one line at a time.
///
/// Lines end at `\n`; one `\r` before the end of a line is dropped, also on a
/// final line without `\n`.
///
/// Returns the number of lines processed. Writers are flushed on success;
/// on failure nothing more is written after the failing line.
pub fn unliterate_to<R, D, M>(
    mut reader: R,
    prefixes: &PrefixTable,
    definition: &mut D,
    implementation: &mut M,
) -> Result<usize, StreamError>
where
    R: BufRead,
    D: Write,
    M: Write,
{
    let mut count = 0;
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf).map_err(StreamError::Read)? == 0 {
            break;
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let kind = prefixes.classify(line);

        writeln!(definition, "{}", kind.definition_line()).map_err(StreamError::Definition)?;
        writeln!(implementation, "{}", kind.implementation_line())
            .map_err(StreamError::Implementation)?;
        count += 1;
    }

    definition.flush().map_err(StreamError::Definition)?;
    implementation.flush().map_err(StreamError::Implementation)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Convention;

    const SAMPLE: &str = "\
This module implements a tree.
>> module Data.Tree

>> :: Tree a = Leaf | Node a (Tree a) (Tree a)
>> size :: (Tree a) -> Int
>  size Leaf = 0
>  size (Node _ l r) = 1 + size l + size r
// trailing prose
";

    fn stream(input: &str, prefixes: &PrefixTable) -> (String, String, usize) {
        let mut def = Vec::new();
        let mut imp = Vec::new();
        let n = unliterate_to(input.as_bytes(), prefixes, &mut def, &mut imp).unwrap();
        (
            String::from_utf8(def).unwrap(),
            String::from_utf8(imp).unwrap(),
            n,
        )
    }

    #[test]
    fn test_sample_module() {
        let (def, imp, n) = stream(SAMPLE, &PrefixTable::default());
        assert_eq!(n, 8);
        assert_eq!(
            def,
            "\ndefinition module Data.Tree\n\n:: Tree a = Leaf | Node a (Tree a) (Tree a)\nsize :: (Tree a) -> Int\n\n\n\n"
        );
        assert_eq!(
            imp,
            "\nimplementation module Data.Tree\n\n:: Tree a = Leaf | Node a (Tree a) (Tree a)\nsize :: (Tree a) -> Int\nsize Leaf = 0\nsize (Node _ l r) = 1 + size l + size r\n\n"
        );
    }

    #[test]
    fn test_line_counts_match_input() {
        let inputs = ["", "x", ">> a\n>  b", ">> module M\n\n\n", SAMPLE];
        for input in inputs {
            let (def, imp, n) = stream(input, &PrefixTable::default());
            assert_eq!(n, input.lines().count(), "input {:?}", input);
            assert_eq!(def.lines().count(), n);
            assert_eq!(imp.lines().count(), n);
        }
    }

    #[test]
    fn test_crlf_input() {
        let (def, imp, n) = stream(">> f :: Int\r\n>  f = 1\r\n", &PrefixTable::default());
        assert_eq!(n, 2);
        assert_eq!(def, "f :: Int\n\n");
        assert_eq!(imp, "f :: Int\nf = 1\n");
    }

    #[test]
    fn test_final_carriage_return_dropped() {
        let (def, imp, n) = stream(">> f :: Int\r\n>  f = 1\r", &PrefixTable::default());
        assert_eq!(n, 2);
        assert_eq!(def, "f :: Int\n\n");
        assert_eq!(imp, "f :: Int\nf = 1\n");

        // Only one carriage return belongs to the line ending
        let (_, imp, _) = stream(">  x\r\r\n", &PrefixTable::default());
        assert_eq!(imp, "x\r\n");
    }

    #[test]
    fn test_streaming_matches_in_memory() {
        let prefixes = PrefixTable::default();
        let memory = unliterate(SAMPLE.lines(), &prefixes);
        let (def, imp, _) = stream(SAMPLE, &prefixes);
        assert_eq!(memory.definition_text(), def);
        assert_eq!(memory.implementation_text(), imp);
    }

    #[test]
    fn test_idempotent() {
        let prefixes = PrefixTable::default();
        assert_eq!(stream(SAMPLE, &prefixes), stream(SAMPLE, &prefixes));
    }

    #[test]
    fn test_single_convention() {
        let prefixes = PrefixTable::for_convention(Convention::Single);
        let out = unliterate(["< module M", "< f :: Int", "> f = 1", ">> no"], &prefixes);
        assert_eq!(
            out.definition,
            vec!["definition module M", "f :: Int", "", ""]
        );
        assert_eq!(
            out.implementation,
            vec!["implementation module M", "f :: Int", "f = 1", ""]
        );
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let input: &[u8] = b">> ok\n\xff\xfe\n";
        let mut def = Vec::new();
        let mut imp = Vec::new();
        let err = unliterate_to(input, &PrefixTable::default(), &mut def, &mut imp).unwrap_err();
        assert!(matches!(err, StreamError::Read(_)));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_attributed() {
        let mut def = Vec::new();
        let err = unliterate_to(
            ">> a\n".as_bytes(),
            &PrefixTable::default(),
            &mut def,
            &mut FailingWriter,
        )
        .unwrap_err();
        assert!(matches!(err, StreamError::Implementation(_)));
    }
}
