use std::io::{self, Write};

/// Prints `prompt` and reads one line. An empty string means stdin was closed.
pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Asks a `(y/N)` question; anything but a yes counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    Ok(is_yes(&input(&format!("{question} (y/N): "))?))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
