//! Unit tests for the formatter, header derivation, and table writer.

#[cfg(test)]
mod formatter {
    use crate::format::{Align, Formatter};

    #[test]
    fn exact_integer_roundtrip() {
        let fmt = Formatter::new(true, 10);
        let cell = fmt.format_int(4242, 12);
        assert_eq!(cell.chars().count(), 12);
        assert!(!cell.contains('.'));
        assert_eq!(cell.trim().parse::<i64>().unwrap(), 4242);
    }

    #[test]
    fn scientific_exactly_when_rule_fires() {
        let fmt = Formatter::new(true, 10);
        // 5 digits, inside (−5, 6) and within the column: fixed.
        assert!(!fmt.format_float(99_999.0, 10).contains('e'));
        // 6 digits: scientific.
        assert!(fmt.format_float(100_000.0, 10).contains('e'));
        // 5 digits but a 4-char column: scientific.
        assert!(fmt.format_float(12_345.0, 4).contains('e'));
        // Same value, 5-char column: fixed (overflows via decimals only).
        assert!(!fmt.format_float(12_345.0, 5).contains('e'));
        // The sign occupies a column, pushing the estimate to 6.
        assert!(fmt.format_float(-12_345.0, 5).contains('e'));
    }

    #[test]
    fn large_integers_go_scientific() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_int(1_234_567, 10), " 1.2346e6 ");
    }

    #[test]
    fn pretty_fixed_decimals_follow_column_budget() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_float(12345.6789, 10), "12345.679 ");
        assert_eq!(fmt.format_float(0.0, 9), " 0.00000 ");
    }

    #[test]
    fn pretty_scientific_decimals_clamped() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_float(1.23456789e9, 20), "     1.23457e9      ");
    }

    #[test]
    fn non_pretty_is_precision_first() {
        let fmt = Formatter::new(false, 10);
        // 9 − 5 + 1 = 5 decimals; 11 chars overflow the 10-char column.
        assert_eq!(fmt.format_float(12345.6789, 10), "12345.67890");
    }

    #[test]
    fn negative_decimal_budget_clamps_to_zero() {
        let fmt = Formatter::new(false, 3);
        // precision 2, 4 digits: 2 − 4 + 1 < 0 → no decimals at all.
        assert_eq!(fmt.format_float(1234.4, 6), " 1234 ");
    }

    #[test]
    fn pretty_text_keeps_the_tail() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_text("a_very_long_metric_name", 10), " ric_name ");
    }

    #[test]
    fn non_pretty_text_never_truncates() {
        let fmt = Formatter::new(false, 10);
        assert_eq!(fmt.format_text("abcdefghijk", 5), "abcdefghijk");
    }

    #[test]
    fn short_text_is_padded_not_truncated() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_text("energy", 10), "  energy  ");
    }

    #[test]
    fn alignment_variants() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.clone().with_align(Align::Left).format_int(7, 5), "7    ");
        assert_eq!(fmt.clone().with_align(Align::Right).format_int(7, 5), "    7");
        // Center puts the odd fill char on the right.
        assert_eq!(fmt.format_int(7, 4), " 7  ");
    }

    #[test]
    fn pad_char_is_configurable() {
        let fmt = Formatter::new(true, 10).with_pad('0').with_align(Align::Right);
        assert_eq!(fmt.format_int(42, 6), "000042");
    }

    #[test]
    fn formatting_is_idempotent() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_float(12345.6789, 10), fmt.format_float(12345.6789, 10));
        assert_eq!(fmt.format_text("state", 8), fmt.format_text("state", 8));
    }

    #[test]
    fn non_finite_floats_degrade_to_text() {
        let fmt = Formatter::new(true, 10);
        assert_eq!(fmt.format_float(f64::INFINITY, 10), "   inf    ");
        assert_eq!(fmt.format_float(f64::NAN, 10), "   NaN    ");
    }
}

#[cfg(test)]
mod headers {
    use sl_core::Namespace;

    use crate::header::derive_header;

    fn ns(path: &str) -> Namespace {
        Namespace::from_dotted(path).unwrap()
    }

    #[test]
    fn unlimited_keeps_the_full_path() {
        assert_eq!(derive_header(&ns("md.pair.LJ.energy"), ".", None), "md.pair.LJ.energy");
    }

    #[test]
    fn leaf_survives_any_budget() {
        assert_eq!(derive_header(&ns("a.b.energy"), ".", Some(0)), "energy");
        assert_eq!(derive_header(&ns("energy"), ".", Some(2)), "energy");
    }

    #[test]
    fn cumulative_budget_boundaries() {
        let key = ns("app.md.pair.LJ.energy");
        // leaf alone is 6 chars; +LJ = 8; +pair = 12; +md = 14.
        assert_eq!(derive_header(&key, ".", Some(7)), "energy");
        assert_eq!(derive_header(&key, ".", Some(8)), "LJ.energy");
        assert_eq!(derive_header(&key, ".", Some(12)), "pair.LJ.energy");
        assert_eq!(derive_header(&key, ".", Some(13)), "pair.LJ.energy");
        assert_eq!(derive_header(&key, ".", Some(14)), "md.pair.LJ.energy");
    }

    #[test]
    fn custom_separator() {
        assert_eq!(derive_header(&ns("sim.step"), "/", None), "sim/step");
    }
}

#[cfg(test)]
mod writer {
    use sl_core::{
        BufferSink, Category, CategorySet, QuantitySource, QuantityTree, RankGate,
    };

    use crate::error::OutputError;
    use crate::table::TableBuilder;

    /// Source whose tree the test mutates between invocations.
    #[derive(Debug)]
    struct StubSource {
        categories: CategorySet,
        tree:       QuantityTree,
    }

    impl StubSource {
        fn scalar(tree: QuantityTree) -> Self {
            Self { categories: Category::Scalar | Category::Text, tree }
        }

        fn text_only(tree: QuantityTree) -> Self {
            Self { categories: Category::Text.into(), tree }
        }
    }

    impl QuantitySource for StubSource {
        fn categories(&self) -> CategorySet {
            self.categories
        }

        fn collect(&mut self) -> QuantityTree {
            self.tree.clone()
        }
    }

    fn tree_ab() -> QuantityTree {
        let mut tree = QuantityTree::new();
        tree.insert_value("a", 1.0);
        tree.insert_value("b", 2.0);
        tree
    }

    fn trimmed(line: &str) -> Vec<&str> {
        line.split('|').map(str::trim).collect()
    }

    #[test]
    fn header_reemitted_on_key_set_growth() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .delimiter("|")
            .build()
            .unwrap();

        writer.write().unwrap();
        writer.write().unwrap(); // unchanged keys: no new header
        writer.source_mut().tree.insert_value("c", 3.0);
        writer.write().unwrap();

        let out = writer.into_sink().into_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5); // header, row, row, header, row
        assert_eq!(trimmed(lines[0]), ["a", "b"]);
        assert_eq!(trimmed(lines[3]), ["a", "b", "c"]);
        // Every data line matches the cardinality of its last header.
        assert_eq!(lines[1].split('|').count(), 2);
        assert_eq!(lines[2].split('|').count(), 2);
        assert_eq!(lines[4].split('|').count(), 3);
    }

    #[test]
    fn reordered_keys_do_not_reemit_or_reorder() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .delimiter("|")
            .build()
            .unwrap();
        writer.write().unwrap();

        // Same key set, opposite insertion order.
        let mut reordered = QuantityTree::new();
        reordered.insert_value("b", 2.0);
        reordered.insert_value("a", 1.0);
        writer.source_mut().tree = reordered;
        writer.write().unwrap();

        let out = writer.into_sink().into_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3); // one header, two identical rows
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn first_invocation_establishes_schema() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .build()
            .unwrap();
        assert!(writer.schema().is_empty());
        writer.write().unwrap();
        assert_eq!(writer.schema().len(), 2);
        assert_eq!(writer.schema()[0].key.to_string(), "a");
        assert_eq!(writer.schema()[0].width, 16); // max(10, 10 + 6)
    }

    #[test]
    fn header_wider_than_floor_sets_the_width() {
        let mut tree = QuantityTree::new();
        tree.insert_value("a_very_long_metric_name", 1.0);
        let mut writer = TableBuilder::new(StubSource::scalar(tree), BufferSink::new())
            .min_column_width(10)
            .build()
            .unwrap();
        writer.write().unwrap();
        assert_eq!(writer.schema()[0].width, 23);
    }

    #[test]
    fn pretty_energy_scenario() {
        let mut tree = QuantityTree::new();
        tree.insert_value("energy", 12345.6789);
        let mut writer = TableBuilder::new(StubSource::scalar(tree), BufferSink::new())
            .min_column_width(10)
            .build()
            .unwrap();
        writer.write().unwrap();
        assert_eq!(writer.into_sink().into_string(), "  energy  \n12345.679 \n");
    }

    #[test]
    fn truncated_headers_via_max_header_len() {
        let mut inner = QuantityTree::new();
        inner.insert_value("energy", 1.0);
        let mut pair = QuantityTree::new();
        pair.insert_group("LJ", inner);
        let mut tree = QuantityTree::new();
        tree.insert_group("pair", pair);

        let mut writer = TableBuilder::new(StubSource::scalar(tree), BufferSink::new())
            .max_header_len(8)
            .build()
            .unwrap();
        writer.write().unwrap();
        let out = writer.into_sink().into_string();
        assert!(out.lines().next().unwrap().contains("LJ.energy"));
        assert!(!out.contains("pair.LJ.energy"));
    }

    #[test]
    fn sequence_quantities_are_filtered() {
        let mut tree = QuantityTree::new();
        tree.insert_value("energy", 1.0);
        tree.insert_value("velocities", vec![1.0, 2.0, 3.0]);
        tree.insert_value("state", "sampling");

        let mut writer = TableBuilder::new(StubSource::scalar(tree), BufferSink::new())
            .delimiter("|")
            .build()
            .unwrap();
        writer.write().unwrap();
        assert_eq!(writer.schema().len(), 2);
        let out = writer.into_sink().into_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(trimmed(lines[0]), ["energy", "state"]);
        assert_eq!(trimmed(lines[1])[1], "sampling");
    }

    #[test]
    fn empty_sample_writes_bare_line() {
        let mut writer =
            TableBuilder::new(StubSource::scalar(QuantityTree::new()), BufferSink::new())
                .build()
                .unwrap();
        writer.write().unwrap();
        assert!(writer.schema().is_empty());
        assert_eq!(writer.sink().contents(), "\n");
    }

    #[test]
    fn flush_follows_each_data_row_only() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .build()
            .unwrap();
        writer.write().unwrap(); // header + row, one flush
        assert_eq!(writer.sink().flush_count(), 1);
        writer.write().unwrap();
        assert_eq!(writer.sink().flush_count(), 2);
    }

    #[test]
    fn read_only_sink_rejected_at_construction() {
        let err = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::read_only())
            .build()
            .unwrap_err();
        assert!(matches!(err, OutputError::SinkNotWritable));
    }

    #[test]
    fn scalarless_source_rejected_at_construction() {
        let err = TableBuilder::new(StubSource::text_only(tree_ab()), BufferSink::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, OutputError::ScalarsUnsupported));
    }

    #[test]
    fn non_elected_rank_is_a_noop() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .gate(RankGate::new(1, 0))
            .build()
            .unwrap();
        writer.write().unwrap();
        assert!(writer.schema().is_empty());
        assert_eq!(writer.sink().contents(), "");
        assert_eq!(writer.sink().flush_count(), 0);
    }

    #[test]
    fn elected_rank_writes() {
        let mut writer = TableBuilder::new(StubSource::scalar(tree_ab()), BufferSink::new())
            .gate(RankGate::root_of(0))
            .build()
            .unwrap();
        writer.write().unwrap();
        assert_eq!(writer.sink().contents().lines().count(), 2);
    }

    #[test]
    fn file_sink_end_to_end() {
        use sl_core::FileSink;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("thermo.log");
        let mut writer = TableBuilder::new(
            StubSource::scalar(tree_ab()),
            FileSink::create(&path).unwrap(),
        )
        .min_column_width(10)
        .build()
        .unwrap();

        writer.write().unwrap();
        writer.write().unwrap();

        // write() flushes after every row, so the file is readable mid-run.
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}
