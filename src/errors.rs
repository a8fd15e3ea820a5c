// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimensions(rows: usize, cols: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {} x {}, a grid needs at least one row and one column", rows, cols)
        }
        RaggedRows(row: usize, expected: usize, found: usize) {
            description("grid rows differ in length")
            display("grid row {} has {} cells, expected {}", row, found, expected)
        }
        UnknownCellSymbol(symbol: char, row: usize, col: usize) {
            description("unknown cell symbol")
            display("unknown cell symbol {:?} at row {} column {}", symbol, row, col)
        }
    }
}
