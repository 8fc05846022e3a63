//! Position scales mapping data space to pixel space

/// Affine map from a numeric domain onto a pixel range
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    /// Create a scale from a data domain onto a pixel range
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to its pixel position.
    ///
    /// A zero-span domain maps everything to the range start.
    pub fn map(&self, value: f64) -> f32 {
        let span = self.domain.1 - self.domain.0;
        if span <= 0.0 {
            return self.range.0;
        }

        let t = ((value - self.domain.0) / span) as f32;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Nice tick values covering the domain.
    ///
    /// The rough step `span / count` is snapped to the nearest 1/2/5/10
    /// multiple of its decade.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let span = self.domain.1 - self.domain.0;
        if span <= 0.0 || count == 0 {
            return vec![];
        }

        let rough_step = span / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.abs().log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.5 {
            magnitude
        } else if residual <= 3.0 {
            2.0 * magnitude
        } else if residual <= 7.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let start = (self.domain.0 / nice_step).ceil() * nice_step;
        let mut ticks = Vec::new();

        let mut value = start;
        while value <= self.domain.1 + nice_step * 0.001 {
            ticks.push(value);
            value += nice_step;
        }

        ticks
    }
}

/// Categorical position scale: `n` equal bands with fixed inner padding
#[derive(Debug, Clone, Copy)]
pub struct BandScale {
    count: usize,
    range: (f32, f32),
    padding: f32,
}

impl BandScale {
    /// Create a scale for `count` bands over a pixel range
    pub fn new(count: usize, range: (f32, f32), padding: f32) -> Self {
        Self {
            count,
            range,
            padding,
        }
    }

    /// Pixel extent of band `i` as (start, width)
    pub fn band(&self, i: usize) -> (f32, f32) {
        let total = self.range.1 - self.range.0;
        let step = total / self.count.max(1) as f32;
        let width = (step - self.padding).max(0.0);
        let start = self.range.0 + step * i as f32 + self.padding / 2.0;
        (start, width)
    }

    /// Center line of band `i`
    pub fn center(&self, i: usize) -> f32 {
        let (start, width) = self.band(i);
        start + width / 2.0
    }
}
