pub mod error;
pub mod input;
pub mod qsort;

pub use error::{InputError, SortError};
pub use qsort::normal::{partition3, qsort, qsort_counted, qsort_with, sort_range, SortStats};
pub use qsort::pivot::{Last, Leftmost, MedianOfThree, PivotPicker, RandomPivot};
