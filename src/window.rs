// ═══════════════════════════════════════════════════════════════════════════════
// 📦 window.rs - Central Window Reader
// ═══════════════════════════════════════════════════════════════════════════════
// Reads only a slice of each file, centred on the file midpoint.
// Features:
// - Line count pre-pass over both files (usable rows = the shorter file)
// - Window clamped to the available rows, never an error
// - Fixed column positions: vibration 1,2,3 (X,Y,Z), power 1 (W)
// - Malformed rows fail the whole read
// ═══════════════════════════════════════════════════════════════════════════════

use std::io::{BufRead, BufReader, Read};

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{Result, ViewerError};
use crate::pairing::FilePair;
use crate::source::FileSource;

/// Acceleration X, Y, Z columns in the vibration file
pub const VIBRATION_COLUMNS: [usize; 3] = [1, 2, 3];

/// Power column in the power file
pub const POWER_COLUMNS: [usize; 1] = [1];

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Window / النافذة
// ═══════════════════════════════════════════════════════════════════════════════

/// Contiguous row range to read
/// نطاق الصفوف المتصل المراد قراءته
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First row (0-based) / الصف الأول
    pub start: usize,

    /// Number of rows / عدد الصفوف
    pub count: usize,
}

impl Window {
    /// Window of up to `requested` rows centred in `total_rows`
    /// نافذة حتى `requested` صف في منتصف `total_rows`
    ///
    /// ```text
    /// total = 10000, requested = 1000
    /// center = 5000, half = 500
    /// [0 .. 4499] [4500 .. 5499] [5500 .. 9999]
    ///    skip         read           skip
    /// ```
    pub fn centered(total_rows: usize, requested: usize) -> Self {
        let center = total_rows / 2;
        let half = requested / 2;
        let start = center.saturating_sub(half);
        let count = requested.min(total_rows - start);

        Self { start, count }
    }

    pub fn end(&self) -> usize {
        self.start + self.count
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Pair Window / نافذة الزوج
// ═══════════════════════════════════════════════════════════════════════════════

/// Rows read from both files of a pair
/// الصفوف المقروءة من ملفي الزوج
#[derive(Debug, Clone, PartialEq)]
pub struct PairWindow {
    pub window: Window,

    /// Usable rows: min of both files / الصفوف القابلة للاستخدام
    pub total_rows: usize,

    /// X, Y, Z acceleration per row / التسارع لكل صف
    pub acceleration: Vec<[f64; 3]>,

    /// Power in watts per row / القدرة بالواط لكل صف
    pub power: Vec<f64>,
}

/// Count lines in a file (a final line without newline still counts)
pub fn count_lines<R: Read>(reader: R) -> std::io::Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut count = 0;
    let mut last_byte = None;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        count += buf.iter().filter(|&&b| b == b'\n').count();
        last_byte = buf.last().copied();
        let len = buf.len();
        reader.consume(len);
    }

    if matches!(last_byte, Some(b) if b != b'\n') {
        count += 1;
    }

    Ok(count)
}

/// Read `window` rows of the given columns from a headerless CSV
///
/// Rows before `window.start` are skipped without parsing fields.
/// `file` only labels errors.
pub fn read_columns<R: Read, const K: usize>(
    reader: R,
    window: Window,
    columns: [usize; K],
    file: &str,
) -> Result<Vec<[f64; K]>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(window.count);
    let records = csv_reader
        .records()
        .enumerate()
        .skip(window.start)
        .take(window.count);

    for (index, record) in records {
        let line = index + 1;
        let record = record.map_err(|source| ViewerError::Csv {
            file: file.to_string(),
            source,
        })?;

        let mut row = [0.0; K];
        for (slot, &column) in row.iter_mut().zip(columns.iter()) {
            let raw = record.get(column).ok_or_else(|| ViewerError::MissingColumn {
                file: file.to_string(),
                line,
                column,
            })?;
            *slot = raw.trim().parse().map_err(|_| ViewerError::NonNumeric {
                file: file.to_string(),
                line,
                column,
                value: raw.to_string(),
            })?;
        }
        rows.push(row);
    }

    if rows.len() < window.count {
        // Blank lines are counted by the pre-pass but skipped by the CSV reader
        warn!(
            "{}: expected {} rows from {}, got {}",
            file,
            window.count,
            window.start,
            rows.len()
        );
    }

    Ok(rows)
}

fn count_in(source: &dyn FileSource, name: &str) -> Result<usize> {
    let reader = source.open(name)?;
    count_lines(reader).map_err(|e| ViewerError::io(name, e))
}

/// Read the central window of both files of a pair
/// قراءة النافذة المركزية من ملفي الزوج
pub fn read_pair_window(
    source: &dyn FileSource,
    pair: &FilePair,
    requested: usize,
) -> Result<PairWindow> {
    let vibration_rows = count_in(source, &pair.vibration)?;
    let power_rows = count_in(source, &pair.power)?;
    let total_rows = vibration_rows.min(power_rows);
    let window = Window::centered(total_rows, requested);

    debug!(
        "{}: {} vibration rows, {} power rows, window {}..{}",
        pair.key,
        vibration_rows,
        power_rows,
        window.start,
        window.end()
    );

    let acceleration = read_columns(
        source.open(&pair.vibration)?,
        window,
        VIBRATION_COLUMNS,
        &pair.vibration,
    )?;
    let power: Vec<f64> = read_columns(source.open(&pair.power)?, window, POWER_COLUMNS, &pair.power)?
        .into_iter()
        .map(|[watts]| watts)
        .collect();

    Ok(PairWindow {
        window,
        total_rows,
        acceleration,
        power,
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DirectorySource;
    use std::fs;

    #[test]
    fn test_window_centered() {
        assert_eq!(Window::centered(10_000, 1_000), Window { start: 4_500, count: 1_000 });
        assert_eq!(Window::centered(800, 1_000), Window { start: 0, count: 800 });
    }

    #[test]
    fn test_window_edge_cases() {
        assert_eq!(Window::centered(0, 1_000), Window { start: 0, count: 0 });
        assert_eq!(Window::centered(1_000, 1_000), Window { start: 0, count: 1_000 });
        // Odd sizes: center = 5, half = 1
        assert_eq!(Window::centered(11, 3), Window { start: 4, count: 3 });
        assert_eq!(Window::centered(1_001, 1_000), Window { start: 0, count: 1_000 });
    }

    #[test]
    fn test_window_invariants_hold_everywhere() {
        for total in 0..300 {
            for requested in 1..300 {
                let w = Window::centered(total, requested);
                assert!(w.end() <= total, "N={} W={} -> {:?}", total, requested, w);
                assert!(w.count <= requested);
                if total >= requested {
                    assert_eq!(w.start, total / 2 - requested / 2);
                    assert_eq!(w.count, requested);
                }
            }
        }
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines("".as_bytes()).unwrap(), 0);
        assert_eq!(count_lines("a\nb\n".as_bytes()).unwrap(), 2);
        assert_eq!(count_lines("a\nb".as_bytes()).unwrap(), 2);
        assert_eq!(count_lines("\n".as_bytes()).unwrap(), 1);
    }

    #[test]
    fn test_read_columns_selects_window_and_columns() {
        let data = "t0,0,0,0\nt1,1,2,2\nt2,3,4,0\nt3,9,9,9\n";
        let window = Window { start: 1, count: 2 };

        let rows = read_columns(data.as_bytes(), window, VIBRATION_COLUMNS, "M1A.csv").unwrap();

        assert_eq!(rows, vec![[1.0, 2.0, 2.0], [3.0, 4.0, 0.0]]);
    }

    #[test]
    fn test_read_columns_ignores_bad_rows_outside_window() {
        let data = "garbage\nt1,5\nt2,6\nt3,not-a-number\n";
        let window = Window { start: 1, count: 2 };

        let rows = read_columns(data.as_bytes(), window, POWER_COLUMNS, "M1A_power.csv").unwrap();

        assert_eq!(rows, vec![[5.0], [6.0]]);
    }

    #[test]
    fn test_read_columns_missing_column() {
        let data = "t0,1,2\n";
        let window = Window { start: 0, count: 1 };

        let err = read_columns(data.as_bytes(), window, VIBRATION_COLUMNS, "M1A.csv").unwrap_err();

        assert!(matches!(
            err,
            ViewerError::MissingColumn { line: 1, column: 3, .. }
        ));
    }

    #[test]
    fn test_read_columns_non_numeric() {
        let data = "t0,1,2,3\nt1,1,abc,3\n";
        let window = Window { start: 0, count: 2 };

        let err = read_columns(data.as_bytes(), window, VIBRATION_COLUMNS, "M1A.csv").unwrap_err();

        match err {
            ViewerError::NonNumeric { line, column, value, .. } => {
                assert_eq!((line, column, value.as_str()), (2, 2, "abc"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_read_pair_window_from_directory() {
        let dir = tempfile::tempdir().unwrap();

        // 10 vibration rows, 8 power rows -> N = 8, W = 4 -> start 2
        let vibration: String = (0..10).map(|i| format!("t{},{},0,0\n", i, i)).collect();
        let power: String = (0..8).map(|i| format!("t{},{}.5\n", i, i)).collect();
        fs::write(dir.path().join("M1234A.csv"), vibration).unwrap();
        fs::write(dir.path().join("M1234A_power.csv"), power).unwrap();

        let source = DirectorySource::new(dir.path());
        let pair = FilePair::from_key("M1234A");
        let result = read_pair_window(&source, &pair, 4).unwrap();

        assert_eq!(result.total_rows, 8);
        assert_eq!(result.window, Window { start: 2, count: 4 });
        assert_eq!(
            result.acceleration,
            vec![[2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [4.0, 0.0, 0.0], [5.0, 0.0, 0.0]]
        );
        assert_eq!(result.power, vec![2.5, 3.5, 4.5, 5.5]);
    }

    #[test]
    fn test_read_pair_window_clamps_large_request() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("M1A.csv"), "a,1,1,1\nb,2,2,2\nc,3,3,3").unwrap();
        fs::write(dir.path().join("M1A_power.csv"), "a,10\nb,20\nc,30\n").unwrap();

        let source = DirectorySource::new(dir.path());
        let result = read_pair_window(&source, &FilePair::from_key("M1A"), 20_000).unwrap();

        assert_eq!(result.window, Window { start: 0, count: 3 });
        assert_eq!(result.acceleration.len(), 3);
        assert_eq!(result.power, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_read_pair_window_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("M1A.csv"), "a,1,1,1\n").unwrap();

        let source = DirectorySource::new(dir.path());
        let result = read_pair_window(&source, &FilePair::from_key("M1A"), 1_000);

        assert!(matches!(result, Err(ViewerError::Io { .. })));
    }

    #[test]
    fn test_read_pair_window_propagates_bad_power_row() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("M1A.csv"), "a,1,1,1\nb,2,2,2\n").unwrap();
        fs::write(dir.path().join("M1A_power.csv"), "a,10\nb\n").unwrap();

        let source = DirectorySource::new(dir.path());
        let result = read_pair_window(&source, &FilePair::from_key("M1A"), 1_000);

        assert!(matches!(
            result,
            Err(ViewerError::MissingColumn { line: 2, column: 1, .. })
        ));
    }
}
