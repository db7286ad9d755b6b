//! Interactive prompts for grid dimensions and difficulty.
//!
//! Reading is generic over `BufRead` so the prompt loops are testable with
//! in-memory input.

use std::io::{self, BufRead, Write};

use gridseek_scenario::Density;

/// Read one line, trimmed. `None` on end of input.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed mid-prompt")
}

/// Prompt for grid dimensions until both entries are integers greater
/// than 2.
pub fn read_dimensions(input: &mut impl BufRead) -> io::Result<(i32, i32)> {
    loop {
        prompt("Number of rows (> 2): ")?;
        let rows = read_trimmed_line(input)?.ok_or_else(eof)?;
        prompt("Number of columns (> 2): ")?;
        let cols = read_trimmed_line(input)?.ok_or_else(eof)?;

        match (rows.parse::<i32>(), cols.parse::<i32>()) {
            (Ok(r), Ok(c)) if r > 2 && c > 2 => return Ok((r, c)),
            (Ok(_), Ok(_)) => println!("Both dimensions must exceed 2."),
            _ => println!("Please enter valid integers."),
        }
    }
}

/// Prompt for the difficulty level until a valid menu choice is entered.
pub fn read_density(input: &mut impl BufRead) -> io::Result<Density> {
    println!("\nChoose a difficulty level:");
    for (i, d) in [Density::Easy, Density::Medium, Density::Hard]
        .iter()
        .enumerate()
    {
        println!("{}. {}", i + 1, d.label());
    }
    loop {
        prompt("Your choice (1/2/3): ")?;
        let choice = read_trimmed_line(input)?.ok_or_else(eof)?;
        match choice.parse::<u32>().ok().and_then(Density::from_choice) {
            Some(d) => return Ok(d),
            None => println!("Invalid choice. Please enter 1, 2 or 3."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn accepts_valid_dimensions() {
        let mut input = Cursor::new("5\n7\n");
        assert_eq!(read_dimensions(&mut input).unwrap(), (5, 7));
    }

    #[test]
    fn reprompts_until_dimensions_valid() {
        let mut input = Cursor::new("2\n9\nabc\n4\n6\n8\n");
        assert_eq!(read_dimensions(&mut input).unwrap(), (6, 8));
    }

    #[test]
    fn dimension_eof_is_an_error() {
        let mut input = Cursor::new("5\n");
        assert!(read_dimensions(&mut input).is_err());
    }

    #[test]
    fn maps_menu_choices_to_densities() {
        let mut input = Cursor::new("3\n");
        assert_eq!(read_density(&mut input).unwrap(), Density::Hard);
    }

    #[test]
    fn reprompts_until_choice_valid() {
        let mut input = Cursor::new("0\nnope\n2\n");
        assert_eq!(read_density(&mut input).unwrap(), Density::Medium);
    }
}
