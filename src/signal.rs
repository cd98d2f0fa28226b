// ═══════════════════════════════════════════════════════════════════════════════
// 📦 signal.rs - Signal Processing
// ═══════════════════════════════════════════════════════════════════════════════
// Turns windowed rows into plottable series.
// Magnitude is the plain Euclidean norm: no smoothing, filtering or units.
// ═══════════════════════════════════════════════════════════════════════════════

/// Euclidean magnitude of one acceleration sample
/// السعة الإقليدية لعينة تسارع واحدة
pub fn sample_magnitude([x, y, z]: [f64; 3]) -> f64 {
    (x.powi(2) + y.powi(2) + z.powi(2)).sqrt()
}

/// Per-row magnitude, same length and order as the input
/// السعة لكل صف، بنفس الطول والترتيب
pub fn magnitude(rows: &[[f64; 3]]) -> Vec<f64> {
    rows.iter().copied().map(sample_magnitude).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Sample Series / سلسلة العينات
// ═══════════════════════════════════════════════════════════════════════════════

/// A labelled series ready for plotting
/// سلسلة معنونة جاهزة للرسم
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// Y-axis label / عنوان المحور الصادي
    pub label: &'static str,

    /// Values in row order / القيم بترتيب الصفوف
    pub values: Vec<f64>,
}

impl SampleSeries {
    pub fn acceleration_magnitude(rows: &[[f64; 3]]) -> Self {
        Self {
            label: "Acceleration Magnitude",
            values: magnitude(rows),
        }
    }

    pub fn power(values: Vec<f64>) -> Self {
        Self {
            label: "Power (W)",
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Min/max for axis scaling
    ///
    /// Never returns an empty range: a flat series is padded by 1.0 on
    /// each side and an empty one maps to [0, 1].
    pub fn bounds(&self) -> (f64, f64) {
        let finite = self.values.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        if min > max {
            (0.0, 1.0)
        } else if min == max {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        }
    }

    /// (sample index, value) points for the chart
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════
