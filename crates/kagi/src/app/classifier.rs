use crate::domain::file::{Classification, IconKind};

const HTML_SUFFIXES: [&str; 2] = [".html", ".htm"];
const HTML_LABEL: &str = "HTML file";
const GENERIC_LABEL: &str = "File";

/// Classifies a file by its name.
///
/// A name counts as HTML when it ends with `.html` or `.htm`, ignoring case.
pub fn classify(display_name: &str) -> Classification {
    if is_html_name(display_name) {
        return Classification {
            icon: IconKind::Html,
            is_html: true,
            label: HTML_LABEL,
        };
    }

    Classification {
        icon: IconKind::Generic,
        is_html: false,
        label: GENERIC_LABEL,
    }
}

fn is_html_name(display_name: &str) -> bool {
    let lowercase_name = display_name.to_lowercase();

    HTML_SUFFIXES
        .iter()
        .any(|suffix| lowercase_name.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_uppercase_htm_is_html() {
        // Arrange & Act
        let classification = classify("Report.HTM");

        // Assert
        assert!(classification.is_html);
        assert_eq!(classification.icon, IconKind::Html);
        assert_eq!(classification.label, "HTML file");
    }

    #[test]
    fn test_classify_text_file_is_generic() {
        // Arrange & Act
        let classification = classify("notes.txt");

        // Assert
        assert!(!classification.is_html);
        assert_eq!(classification.icon, IconKind::Generic);
        assert_eq!(classification.label, "File");
    }

    #[test]
    fn test_classify_requires_suffix_match() {
        // Arrange & Act & Assert
        assert!(!classify("page.html.bak").is_html);
        assert!(!classify("html").is_html);
        assert!(!classify("index.xhtml5").is_html);
        assert!(classify("index.Html").is_html);
        assert!(classify(".html").is_html);
    }
}
