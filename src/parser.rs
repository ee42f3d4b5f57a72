use crate::{AdjacencyMatrix, Error, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0, space0, space1},
    combinator::{map_res, opt, recognize},
    multi::separated_list1,
    sequence::{pair, preceded, terminated},
    IResult,
};
use std::io::{self, Write};
use std::path::Path;

/// Parse line ending (handles both \n and \r\n)
fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\n"), tag("\r\n")))(input)
}

/// Parse a single unsigned integer
fn parse_usize(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a single, optionally negative, edge label
fn parse_label(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i32>()
    })(input)
}

/// Parse a row of space-separated labels
fn parse_row(input: &str) -> IResult<&str, Vec<i32>> {
    preceded(space0, separated_list1(space1, parse_label))(input)
}

/// Parse a complete adjacency matrix (n rows of n elements each)
fn parse_adjacency_matrix(input: &str, n: usize) -> IResult<&str, Vec<Vec<i32>>> {
    let mut rows = Vec::with_capacity(n);
    let mut remaining = input;

    for _ in 0..n {
        let (rest, row) = terminated(parse_row, pair(space0, opt(line_ending)))(remaining)?;

        if row.len() != n {
            return Err(nom::Err::Failure(nom::error::Error::new(
                remaining,
                nom::error::ErrorKind::LengthValue,
            )));
        }

        rows.push(row);
        remaining = rest;
    }

    Ok((remaining, rows))
}

/// Parse a single matrix: vertex count followed by its rows
fn parse_matrix(input: &str) -> IResult<&str, AdjacencyMatrix> {
    let (input, n) = terminated(preceded(space0, parse_usize), pair(space0, line_ending))(input)?;

    let (rest, rows) = parse_adjacency_matrix(input, n)?;
    let matrix = AdjacencyMatrix::from_rows(rows).map_err(|_| {
        nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        ))
    })?;

    Ok((rest, matrix))
}

/// Parse the data graph followed by the pattern
pub fn parse_two_matrices(input: &str) -> IResult<&str, (AdjacencyMatrix, AdjacencyMatrix)> {
    let (input, data) = preceded(multispace0, parse_matrix)(input)?;
    // Blank lines between the two matrices are allowed
    let (input, pattern) = preceded(multispace0, parse_matrix)(input)?;

    Ok((input, (data, pattern)))
}

/// Parse an instance held in memory, returning `(data, pattern)`
pub fn parse_instance(input: &str) -> Result<(AdjacencyMatrix, AdjacencyMatrix)> {
    match parse_two_matrices(input) {
        Ok((_, matrices)) => Ok(matrices),
        Err(e) => Err(Error::parse(e.to_string())),
    }
}

/// Parse an instance file, returning `(data, pattern)`
pub fn parse_input_file(path: &Path) -> Result<(AdjacencyMatrix, AdjacencyMatrix)> {
    let content = std::fs::read_to_string(path)?;
    parse_instance(&content)
}

/// Write a matrix as its side length followed by space-separated rows
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &AdjacencyMatrix) -> io::Result<()> {
    writeln!(writer, "{}", matrix.num_vertices())?;
    for row in matrix.rows() {
        for (i, val) in row.iter().enumerate() {
            if i > 0 {
                write!(writer, " ")?;
            }
            write!(writer, "{}", val)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write an instance in the format [`parse_instance`] reads
pub fn write_instance<W: Write>(
    writer: &mut W,
    data: &AdjacencyMatrix,
    pattern: &AdjacencyMatrix,
) -> io::Result<()> {
    write_matrix(writer, data)?;
    writeln!(writer)?;
    write_matrix(writer, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_signed_labels_and_crlf() {
        let input = "3\r\n0 -1 2\r\n  4 0 0 \r\n0 0 -7\r\n\r\n\r\n1\r\n-1\r\n";
        let (data, pattern) = parse_instance(input).unwrap();
        assert_eq!(data.num_vertices(), 3);
        assert_eq!(data.get_edge(0, 1), -1);
        assert_eq!(data.get_edge(1, 0), 4);
        assert_eq!(data.get_edge(2, 2), -7);
        assert_eq!(pattern.num_vertices(), 1);
        assert_eq!(pattern.get_edge(0, 0), -1);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let input = "2\n0 1\n0\n1\n0\n";
        assert!(matches!(parse_instance(input), Err(Error::Parse(_))));
    }

    #[test]
    fn test_missing_pattern_is_rejected() {
        assert!(parse_instance("2\n0 1\n1 0\n").is_err());
    }

    #[test]
    fn test_write_then_parse() {
        let data = AdjacencyMatrix::from_rows(vec![vec![0, 12], vec![-3, 0]]).unwrap();
        let pattern = AdjacencyMatrix::from_rows(vec![vec![5]]).unwrap();
        let mut buf = Vec::new();
        write_instance(&mut buf, &data, &pattern).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2\n0 12\n-3 0\n\n1\n5\n");
        assert_eq!(parse_instance(&text).unwrap(), (data, pattern));
    }

    #[test]
    fn test_parse_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1\n0\n1\n0\n").unwrap();
        let (data, pattern) = parse_input_file(file.path()).unwrap();
        assert_eq!(data.num_vertices(), 1);
        assert_eq!(pattern.num_vertices(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_input_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
