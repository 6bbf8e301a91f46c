use crate::domain::requests::CreateProductRequest;
use thiserror::Error;

/// Columns that must be present in the header row before any data row is
/// accepted. Optional columns: description, stock, sku, image_url.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "price", "category"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvParseError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

#[derive(Debug, Default)]
pub struct CsvParseOutcome {
    /// Drafts in input row order, one per accepted data row.
    pub rows: Vec<CreateProductRequest>,
    /// Data rows discarded because their field count did not match the header.
    pub dropped_rows: usize,
}

/// Parses pasted CSV text into product drafts.
///
/// The first line is the header row; columns are identified by header name,
/// not by position in a fixed schema. Data rows are tokenized with a
/// quote-toggle scanner: a comma splits fields only outside a double-quote
/// span, and `"` flips the span without being emitted. A doubled quote is two
/// toggles, not an escaped literal quote — known limitation of the format.
///
/// Rows whose field count does not match the header are dropped, not
/// reported per-row; only the total shows up in `dropped_rows`.
pub fn parse_products(text: &str) -> Result<CsvParseOutcome, CsvParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(CsvParseOutcome::default());
    }

    let mut lines = trimmed.split('\n');
    let Some(header_line) = lines.next() else {
        return Ok(CsvParseOutcome::default());
    };

    // The header row is split on bare commas with quotes stripped; it does
    // not go through the quote scanner.
    let headers: Vec<String> = header_line
        .split(',')
        .map(|h| h.replace('"', "").trim().to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(CsvParseError::MissingColumn(required.to_string()));
        }
    }

    let mut outcome = CsvParseOutcome::default();

    for line in lines {
        let fields = split_fields(line);
        if fields.len() != headers.len() {
            outcome.dropped_rows += 1;
            continue;
        }
        outcome.rows.push(assemble_draft(&headers, &fields));
    }

    Ok(outcome)
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    // The last field has no trailing comma.
    fields.push(current.trim().to_string());

    fields
}

fn assemble_draft(headers: &[String], fields: &[String]) -> CreateProductRequest {
    let mut draft = CreateProductRequest {
        name: String::new(),
        description: None,
        price: 0.0,
        stock: None,
        category: String::new(),
        sku: None,
        image_url: None,
    };

    for (header, value) in headers.iter().zip(fields) {
        match header.as_str() {
            "name" => draft.name = value.clone(),
            "description" => draft.description = non_empty(value),
            "price" => draft.price = value.parse().unwrap_or(0.0),
            "stock" => draft.stock = Some(value.parse().unwrap_or(0)),
            "category" => draft.category = value.clone(),
            "sku" => draft.sku = non_empty(value),
            "image_url" => draft.image_url = non_empty(value),
            // Unrecognized columns pass through the tokenizer but are not
            // part of the draft.
            _ => {}
        }
    }

    draft
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
