//! Decoder for MATLAB Level-5 MAT files holding one compressed numeric variable.

/// Header validation, decompression, element parsing, and typed access.
pub mod mat;
