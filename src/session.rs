use std::io::{self, BufRead, Write};
use log::{error, info};

use crate::constants::*;
use crate::rendering::OutputTarget;
use crate::terminal_io::InputSource;
use crate::types::{Orientation, Vector2D};

/// Every quantity the report prints, computed from the three inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Analysis {
    pub first: Vector2D,
    pub second: Vector2D,
    pub scalar: f64,
    pub sum: Vector2D,
    pub difference: Vector2D,
    pub scaled: Vector2D,
    pub orientation: Orientation,
}

impl Analysis {
    pub fn compute(first: Vector2D, second: Vector2D, scalar: f64) -> Self {
        Analysis {
            first,
            second,
            scalar,
            sum: first.add(second),
            difference: first.subtract(second),
            scaled: first.scale(scalar),
            orientation: first.orientation_to(second),
        }
    }
}

pub struct Session<R> {
    input: InputSource<R>,
    pub output: OutputTarget,
}

impl<R: BufRead> Session<R> {
    pub fn new(reader: R, output: OutputTarget) -> Self {
        Session { input: InputSource::new(reader), output }
    }

    pub fn run(&mut self) -> io::Result<Analysis> {
        let (first, second, scalar) = self.read_inputs()?;
        info!("Read first = {:?}, second = {:?}, scalar = {}", first, second, scalar);

        let analysis = Analysis::compute(first, second, scalar);
        self.report(&analysis).map_err(|e| { error!("Failed to write report: {}", e); e })?;
        Ok(analysis)
    }

    fn read_inputs(&mut self) -> io::Result<(Vector2D, Vector2D, f64)> {
        self.output.write_prompt(PROMPT_FIRST_VECTOR)?;
        let first = self.input.read_vector()?;

        self.output.write_prompt(PROMPT_SECOND_VECTOR)?;
        let second = self.input.read_vector()?;

        self.output.write_prompt(PROMPT_SCALAR)?;
        let scalar = self.input.read_number()?;
        writeln!(self.output)?;

        Ok((first, second, scalar))
    }

    fn report(&mut self, analysis: &Analysis) -> io::Result<()> {
        let out = &mut self.output;

        out.write_vector(LABEL_FIRST_VECTOR, analysis.first)?;
        out.write_vector(LABEL_SECOND_VECTOR, analysis.second)?;
        writeln!(out)?;

        info!(
            "Sum = {:?}, difference = {:?}, scaled by {} = {:?}",
            analysis.sum, analysis.difference, analysis.scalar, analysis.scaled
        );
        out.write_vector(LABEL_ADD, analysis.sum)?;
        out.write_vector(LABEL_SUBTRACT, analysis.difference)?;
        out.write_vector(LABEL_SCALAR_MULT, analysis.scaled)?;
        writeln!(out)?;

        // Originals are reprinted as read; the perpendicularity test only normalized copies.
        out.write_vector(LABEL_FIRST_VECTOR, analysis.first)?;
        out.write_vector(LABEL_SECOND_VECTOR, analysis.second)?;
        info!(
            "Orientation: {} (dot product {})",
            analysis.orientation.label(),
            analysis.first.dot(analysis.second)
        );
        out.write_verdict(analysis.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_transcript(input: &str) -> (io::Result<Analysis>, String) {
        let mut session = Session::new(input.as_bytes(), OutputTarget::buffer());
        let result = session.run();
        (result, session.output.transcript().unwrap())
    }

    #[test]
    fn perpendicular_unit_vectors() {
        let (result, transcript) = run_transcript("1 0 0 1 3\n");
        let analysis = result.unwrap();
        assert_eq!(analysis.sum, Vector2D::new(1.0, 1.0));
        assert_eq!(analysis.difference, Vector2D::new(1.0, -1.0));
        assert_eq!(analysis.scaled, Vector2D::new(3.0, 0.0));
        assert_eq!(analysis.orientation, Orientation::Perpendicular);
        assert_eq!(
            transcript,
            "Enter first vector (2 floats): Enter second vector (2 floats): Enter scalar multiplier: \n\
             First vector: (1, 0) has length 1\n\
             Second vector: (0, 1) has length 1\n\
             \n\
             Vector add: (1, 1) has length 1.41421\n\
             Vector subtract: (1, -1) has length 1.41421\n\
             Scalar multiplier: (3, 0) has length 3\n\
             \n\
             First vector: (1, 0) has length 1\n\
             Second vector: (0, 1) has length 1\n\
             Vectors are PERPENDICULAR.\n"
        );
    }

    #[test]
    fn parallel_vectors() {
        let (result, transcript) = run_transcript("2 0\n4 0\n0.5\n");
        let analysis = result.unwrap();
        assert_eq!(analysis.orientation, Orientation::NotPerpendicular);
        assert!(transcript.contains("Vector add: (6, 0) has length 6\n"));
        assert!(transcript.contains("Vector subtract: (-2, 0) has length 2\n"));
        assert!(transcript.contains("Scalar multiplier: (1, 0) has length 1\n"));
        assert!(transcript.ends_with(
            "First vector: (2, 0) has length 2\nSecond vector: (4, 0) has length 4\nVectors are NOT PERPENDICULAR.\n"
        ));
    }

    #[test]
    fn zero_vector_is_not_perpendicular() {
        let (result, transcript) = run_transcript("1 0 0 0 1");
        assert_eq!(result.unwrap().orientation, Orientation::NotPerpendicular);
        assert!(transcript.contains("Second vector: (0, 0) has length 0\n"));
        assert!(transcript.ends_with("Vectors are NOT PERPENDICULAR.\n"));
    }

    #[test]
    fn two_zero_vectors_are_not_perpendicular() {
        let (result, transcript) = run_transcript("0 0 0 0 1");
        assert_eq!(result.unwrap().orientation, Orientation::NotPerpendicular);
        assert_eq!(
            transcript,
            "Enter first vector (2 floats): Enter second vector (2 floats): Enter scalar multiplier: \n\
             First vector: (0, 0) has length 0\n\
             Second vector: (0, 0) has length 0\n\
             \n\
             Vector add: (0, 0) has length 0\n\
             Vector subtract: (0, 0) has length 0\n\
             Scalar multiplier: (0, 0) has length 0\n\
             \n\
             First vector: (0, 0) has length 0\n\
             Second vector: (0, 0) has length 0\n\
             Vectors are NOT PERPENDICULAR.\n"
        );
    }

    #[test]
    fn huge_parallel_vectors_are_not_perpendicular() {
        let (result, transcript) = run_transcript("1e200 0 1e200 0 1");
        assert_eq!(result.unwrap().orientation, Orientation::NotPerpendicular);
        assert!(transcript.contains("First vector: (1e+200, 0) has length 1e+200\n"));
        assert!(transcript.ends_with("Vectors are NOT PERPENDICULAR.\n"));
    }

    #[test]
    fn non_unit_perpendicular_vectors_keep_original_coordinates() {
        let (result, transcript) = run_transcript("3 4 -8 6 -1");
        assert_eq!(result.unwrap().orientation, Orientation::Perpendicular);
        assert!(transcript.contains("Scalar multiplier: (-3, -4) has length 5\n"));
        assert!(transcript.ends_with(
            "First vector: (3, 4) has length 5\nSecond vector: (-8, 6) has length 10\nVectors are PERPENDICULAR.\n"
        ));
    }

    #[test]
    fn malformed_input_stops_after_prompt() {
        let (result, transcript) = run_transcript("1 2 x 4 5");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
        assert_eq!(transcript, "Enter first vector (2 floats): Enter second vector (2 floats): ");
    }

    #[test]
    fn missing_scalar_is_unexpected_eof() {
        let (result, _) = run_transcript("1 2 3 4");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn analysis_is_independent_of_io() {
        let a = Analysis::compute(Vector2D::new(1.0, 2.0), Vector2D::new(-2.0, 1.0), 2.0);
        assert_eq!(a.sum, Vector2D::new(-1.0, 3.0));
        assert_eq!(a.difference, Vector2D::new(3.0, 1.0));
        assert_eq!(a.scaled, Vector2D::new(2.0, 4.0));
        assert_eq!(a.first, Vector2D::new(1.0, 2.0));
        assert_eq!(a.orientation, Orientation::Perpendicular);
    }
}
