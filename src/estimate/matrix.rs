//! Dense travel-time matrix.

/// A dense n×n travel-time matrix in row-major order, in seconds.
///
/// The matrix always holds every ordered pair of stop indices, including
/// self-pairs, so its length is exactly `num_stops²`. Entries may be
/// directional; symmetry is a property of the estimator that filled it,
/// never an assumption of the consumers.
///
/// # Examples
///
/// ```
/// use shuttle_routing::estimate::TravelTimeMatrix;
///
/// let mut m = TravelTimeMatrix::new(3);
/// m.set(0, 1, 42.0);
/// assert_eq!(m.get(0, 1), 42.0);
/// assert_eq!(m.get(1, 0), 0.0);
/// assert_eq!(m.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct TravelTimeMatrix {
    data: Vec<f64>,
    num_stops: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix for the given number of stops, initialized to zero.
    pub fn new(num_stops: usize) -> Self {
        Self {
            data: vec![0.0; num_stops * num_stops],
            num_stops,
        }
    }

    /// Travel time from stop `from` to stop `to`, in seconds.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.num_stops + to]
    }

    /// Sets the travel time from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, seconds: f64) {
        self.data[from * self.num_stops + to] = seconds;
    }

    /// Number of stops covered by this matrix.
    pub fn num_stops(&self) -> usize {
        self.num_stops
    }

    /// Total number of ordered-pair entries (always `num_stops²`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the matrix covers no stops.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if every (i, j)/(j, i) pair agrees within the tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.num_stops {
            for j in (i + 1)..self.num_stops {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
