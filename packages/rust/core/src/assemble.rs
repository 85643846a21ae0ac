//! Cell-list to notebook assembly.

use nbweave_markdown::ParsedCell;
use nbweave_notebook::{Notebook, NotebookCell};

/// Assemble parsed cells into a notebook document, preserving order.
///
/// The parser already drops empty cells, so this is a straight mapping plus
/// document metadata attachment.
pub fn assemble(cells: Vec<ParsedCell>) -> Notebook {
    let mut notebook = Notebook::new();

    for cell in cells {
        match cell {
            ParsedCell::Narrative(text) => notebook.push(NotebookCell::markdown(text)),
            ParsedCell::Executable { language, source } => {
                notebook.push(NotebookCell::code(source, language.as_str()));
            }
        }
    }

    notebook
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbweave_markdown::Language;

    #[test]
    fn maps_cells_in_order() {
        let cells = vec![
            ParsedCell::Narrative("intro".into()),
            ParsedCell::Executable {
                language: Language::Sql,
                source: "SELECT 1".into(),
            },
            ParsedCell::Narrative("outro".into()),
        ];

        let nb = assemble(cells);
        assert_eq!(nb.cell_count(), 3);
        assert!(nb.cells[0].is_markdown());
        assert!(nb.cells[1].is_code());
        assert_eq!(nb.cells[1].language(), Some("sql"));
        assert!(nb.cells[2].is_markdown());
    }

    #[test]
    fn python_cells_use_document_kernel() {
        let nb = assemble(vec![ParsedCell::Executable {
            language: Language::Python,
            source: "x = 1".into(),
        }]);
        assert_eq!(nb.cells[0].language(), None);
    }

    #[test]
    fn no_cells_is_valid() {
        let nb = assemble(Vec::new());
        assert_eq!(nb.cell_count(), 0);
        assert!(nb.to_json().is_ok());
    }
}
