use std::path::{Path, PathBuf};

/// Reason a directory prompt input did not produce a directory.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChooseError {
    #[error("No directory entered")]
    Empty,
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Resolves directory prompt input to an absolute, canonical directory path.
///
/// `~` and `~/...` expand against `home_dir`; other relative input resolves
/// against `working_dir`.
///
/// # Errors
/// Returns a [`ChooseError`] when the input is blank or does not name an
/// existing directory.
pub fn resolve_directory_input(
    input: &str,
    working_dir: &Path,
    home_dir: Option<&Path>,
) -> Result<PathBuf, ChooseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ChooseError::Empty);
    }

    let expanded = expand_home(input, home_dir);
    let candidate = if expanded.is_absolute() {
        expanded
    } else {
        working_dir.join(expanded)
    };

    match candidate.canonicalize() {
        Ok(directory) if directory.is_dir() => Ok(directory),
        _ => Err(ChooseError::NotADirectory(candidate)),
    }
}

/// Resolves the startup directory argument against `working_dir`.
///
/// The result is canonical when the path exists. A missing path is kept as
/// given so the listing reports it as not found.
pub fn resolve_startup_directory(directory: &Path, working_dir: &Path) -> PathBuf {
    let candidate = working_dir.join(directory);

    candidate.canonicalize().unwrap_or(candidate)
}

fn expand_home(input: &str, home_dir: Option<&Path>) -> PathBuf {
    let Some(home_dir) = home_dir else {
        return PathBuf::from(input);
    };

    if input == "~" {
        return home_dir.to_path_buf();
    }

    match input.strip_prefix("~/") {
        Some(rest) => home_dir.join(rest),
        None => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn canonical(path: &Path) -> PathBuf {
        path.canonicalize().expect("failed to canonicalize")
    }

    #[test]
    fn test_resolve_directory_input_absolute_path() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let input = temp_dir.path().to_string_lossy().to_string();

        // Act
        let result = resolve_directory_input(&input, Path::new("/"), None);

        // Assert
        assert_eq!(result, Ok(canonical(temp_dir.path())));
    }

    #[test]
    fn test_resolve_directory_input_relative_to_working_dir() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("site")).expect("failed to create dir");

        // Act
        let result = resolve_directory_input(" site ", temp_dir.path(), None);

        // Assert
        assert_eq!(result, Ok(canonical(&temp_dir.path().join("site"))));
    }

    #[test]
    fn test_resolve_directory_input_expands_home() {
        // Arrange
        let home_dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(home_dir.path().join("docs")).expect("failed to create dir");

        // Act
        let docs = resolve_directory_input("~/docs", Path::new("/"), Some(home_dir.path()));
        let home = resolve_directory_input("~", Path::new("/"), Some(home_dir.path()));

        // Assert
        assert_eq!(docs, Ok(canonical(&home_dir.path().join("docs"))));
        assert_eq!(home, Ok(canonical(home_dir.path())));
    }

    #[test]
    fn test_resolve_directory_input_rejects_file() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let file_path = temp_dir.path().join("page.html");
        fs::write(&file_path, "").expect("failed to write file");

        // Act
        let result = resolve_directory_input("page.html", temp_dir.path(), None);

        // Assert
        assert_eq!(result, Err(ChooseError::NotADirectory(file_path)));
    }

    #[test]
    fn test_resolve_startup_directory_canonicalizes_dot() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");

        // Act
        let directory = resolve_startup_directory(Path::new("."), temp_dir.path());

        // Assert
        assert_eq!(directory, canonical(temp_dir.path()));
    }

    #[test]
    fn test_resolve_startup_directory_keeps_missing_path() {
        // Arrange
        let temp_dir = TempDir::new().expect("failed to create temp dir");

        // Act
        let directory = resolve_startup_directory(Path::new("missing"), temp_dir.path());

        // Assert
        assert_eq!(directory, temp_dir.path().join("missing"));
    }

    #[test]
    fn test_resolve_directory_input_rejects_blank_input() {
        // Arrange & Act
        let result = resolve_directory_input("   ", Path::new("/"), None);

        // Assert
        assert_eq!(result, Err(ChooseError::Empty));
    }
}
