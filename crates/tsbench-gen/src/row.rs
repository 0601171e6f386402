//! Whole-row generation into a pool block.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tsbench_types::{ColumnSchema, GeneratorSpec, TypeError};

use crate::column::ColumnGenerator;
use crate::error::GenError;
use crate::timestamp::{DisorderInterval, TimestampGenerator, TsOutcome};

/// Destination for one generated row.
///
/// The pool's table slot implements this so generators write cells
/// straight into column storage.
pub trait RowWriter {
    /// Store the row's timestamp.
    fn set_timestamp(&mut self, row: usize, ts: i64);
    /// Store one cell.
    fn write_cell(&mut self, row: usize, col: usize, value: &tsbench_types::Value)
    -> Result<(), TypeError>;
    /// Mark one cell NULL.
    fn set_null(&mut self, row: usize, col: usize);
}

/// What one `generate_row_into` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// A row was written at the given timestamp.
    Wrote(i64),
    /// The row was consumed without being written (`none_ratio` drop or
    /// checkpoint-recovery skip); it still counts against the quota.
    Dropped,
    /// The disorder draw went out of range; retry the same row index.
    Skipped,
    /// The generator has no more rows for this table.
    Exhausted,
}

/// Produces rows for one table: a timestamp series plus one value
/// producer per data column.
pub struct RowGenerator {
    ts_gen: TimestampGenerator,
    columns: Vec<ColumnGenerator>,
    null_ratios: Vec<Option<f32>>,
    none_ratios: Vec<Option<f32>>,
    row_index: u64,
    skip_until: Option<i64>,
    rng: StdRng,
}

impl RowGenerator {
    /// Build from the timestamp column spec and the data column schemas.
    pub fn new(ts_col: &ColumnSchema, data_cols: &[ColumnSchema]) -> Result<Self, GenError> {
        let GeneratorSpec::Timestamp(spec) = &ts_col.generator else {
            return Err(GenError::InvalidTimeExpr(format!(
                "first column {} carries no timestamp config",
                ts_col.name
            )));
        };
        let ts_gen = TimestampGenerator::new(&spec.start, &spec.precision, &spec.step)?;
        let columns = data_cols
            .iter()
            .map(ColumnGenerator::new)
            .collect::<Result<Vec<_>, _>>()?;
        let null_ratios = data_cols.iter().map(|c| c.null_ratio).collect();
        let none_ratios = data_cols.iter().map(|c| c.none_ratio).collect();
        Ok(Self {
            ts_gen,
            columns,
            null_ratios,
            none_ratios,
            row_index: 0,
            skip_until: None,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Attach disorder injection windows to the timestamp series.
    #[must_use]
    pub fn with_disorder(mut self, intervals: Vec<DisorderInterval>) -> Self {
        self.ts_gen = self.ts_gen.with_disorder(intervals);
        self
    }

    /// Skip (consume without emitting) rows with `ts <= last_committed`,
    /// used after checkpoint recovery.
    #[must_use]
    pub fn with_skip_until(mut self, last_committed: i64) -> Self {
        self.skip_until = Some(last_committed);
        self
    }

    /// Whether this generator can still produce rows.
    ///
    /// The built-in strategies cycle and never run dry; quota enforcement
    /// lives in the table-data manager.
    #[must_use]
    pub fn has_more(&self) -> bool {
        true
    }

    /// The timestamp series (start/step introspection).
    #[must_use]
    pub fn timestamps(&self) -> &TimestampGenerator {
        &self.ts_gen
    }

    /// Generate one row into `sink` at `row`.
    ///
    /// Returns [`RowOutcome::Skipped`] without consuming the row when the
    /// out-of-order draw must be retried, [`RowOutcome::Dropped`] when the
    /// row was consumed but not written.
    pub fn generate_row_into(
        &mut self,
        sink: &mut dyn RowWriter,
        row: usize,
    ) -> Result<RowOutcome, GenError> {
        // `none` is checked before anything else; a dropped row consumes
        // its timestamp slot and its quota.
        for ratio in self.none_ratios.iter().flatten() {
            if self.rng.random::<f32>() < *ratio {
                let _ = self.ts_gen.next();
                self.row_index += 1;
                return Ok(RowOutcome::Dropped);
            }
        }

        let ts = match self.ts_gen.next() {
            TsOutcome::Emit(ts) => ts,
            TsOutcome::Retry => return Ok(RowOutcome::Skipped),
        };

        if let Some(limit) = self.skip_until {
            if ts <= limit {
                self.row_index += 1;
                return Ok(RowOutcome::Dropped);
            }
        }

        sink.set_timestamp(row, ts);
        for (col, generator) in self.columns.iter_mut().enumerate() {
            let is_null = match self.null_ratios[col] {
                Some(ratio) => self.rng.random::<f32>() < ratio,
                None => false,
            };
            if is_null {
                sink.set_null(row, col);
            } else {
                let value = generator.next(self.row_index, ts);
                sink.write_cell(row, col, &value).map_err(GenError::Write)?;
            }
        }
        self.row_index += 1;
        Ok(RowOutcome::Wrote(ts))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tsbench_types::schema::TimestampSpec;
    use tsbench_types::{GeneratorSpec, Value};

    /// Collects written rows for assertions.
    #[derive(Default)]
    struct VecSink {
        timestamps: Vec<(usize, i64)>,
        cells: Vec<(usize, usize, Value)>,
        nulls: Vec<(usize, usize)>,
    }

    impl RowWriter for VecSink {
        fn set_timestamp(&mut self, row: usize, ts: i64) {
            self.timestamps.push((row, ts));
        }

        fn write_cell(
            &mut self,
            row: usize,
            col: usize,
            value: &Value,
        ) -> Result<(), TypeError> {
            self.cells.push((row, col, value.clone()));
            Ok(())
        }

        fn set_null(&mut self, row: usize, col: usize) {
            self.nulls.push((row, col));
        }
    }

    fn ts_col(start: &str, step: &str) -> ColumnSchema {
        ColumnSchema::with_gen(
            "ts",
            "timestamp",
            GeneratorSpec::Timestamp(TimestampSpec {
                start: start.into(),
                precision: "ms".into(),
                step: step.into(),
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_rows_are_monotonic_and_complete() {
        let data = vec![
            ColumnSchema::with_gen("seq", "int", GeneratorSpec::Order { min: 0, max: 100 })
                .unwrap(),
            ColumnSchema::new("note", "varchar(8)").unwrap(),
        ];
        let mut g = RowGenerator::new(&ts_col("1000", "10"), &data).unwrap();
        let mut sink = VecSink::default();
        for row in 0..5 {
            assert!(matches!(
                g.generate_row_into(&mut sink, row).unwrap(),
                RowOutcome::Wrote(_)
            ));
        }
        assert_eq!(
            sink.timestamps,
            vec![(0, 1000), (1, 1010), (2, 1020), (3, 1030), (4, 1040)]
        );
        // Two cells per row, none null.
        assert_eq!(sink.cells.len(), 10);
        assert!(sink.nulls.is_empty());
        assert_eq!(sink.cells[0].2, Value::Int(0));
        assert_eq!(sink.cells[2].2, Value::Int(1));
    }

    #[test]
    fn test_null_ratio_one_marks_every_cell() {
        let mut col = ColumnSchema::new("v", "int").unwrap();
        col.null_ratio = Some(1.0);
        let mut g = RowGenerator::new(&ts_col("0", "1"), &[col]).unwrap();
        let mut sink = VecSink::default();
        for row in 0..10 {
            g.generate_row_into(&mut sink, row).unwrap();
        }
        assert_eq!(sink.nulls.len(), 10);
        assert!(sink.cells.is_empty());
        // Timestamps are still written for null rows.
        assert_eq!(sink.timestamps.len(), 10);
    }

    #[test]
    fn test_none_ratio_one_drops_every_row() {
        let mut col = ColumnSchema::new("v", "int").unwrap();
        col.none_ratio = Some(1.0);
        let mut g = RowGenerator::new(&ts_col("0", "1"), &[col]).unwrap();
        let mut sink = VecSink::default();
        for row in 0..10 {
            assert_eq!(g.generate_row_into(&mut sink, row).unwrap(), RowOutcome::Dropped);
        }
        assert!(sink.timestamps.is_empty());
        assert!(sink.cells.is_empty());
    }

    #[test]
    fn test_skip_until_consumes_early_rows() {
        let data = vec![ColumnSchema::new("v", "int").unwrap()];
        let mut g = RowGenerator::new(&ts_col("1000", "10"), &data)
            .unwrap()
            .with_skip_until(1020);
        let mut sink = VecSink::default();
        let outcomes: Vec<RowOutcome> = (0..5)
            .map(|row| g.generate_row_into(&mut sink, row).unwrap())
            .collect();
        // 1000, 1010, 1020 skipped; 1030, 1040 written.
        assert_eq!(
            outcomes,
            vec![
                RowOutcome::Dropped,
                RowOutcome::Dropped,
                RowOutcome::Dropped,
                RowOutcome::Wrote(1030),
                RowOutcome::Wrote(1040),
            ]
        );
    }

    #[test]
    fn test_expression_column_sees_timestamp() {
        let data = vec![
            ColumnSchema::with_gen(
                "d",
                "double",
                GeneratorSpec::Expression { formula: "_t / 10".into() },
            )
            .unwrap(),
        ];
        let mut g = RowGenerator::new(&ts_col("100", "10"), &data).unwrap();
        let mut sink = VecSink::default();
        g.generate_row_into(&mut sink, 0).unwrap();
        g.generate_row_into(&mut sink, 1).unwrap();
        assert_eq!(sink.cells[0].2, Value::Double(10.0));
        assert_eq!(sink.cells[1].2, Value::Double(11.0));
    }
}
