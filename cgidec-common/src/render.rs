//! Text rendering for CGI breakdowns.
//!
//! Turns the ordered field records produced by the decoders into the
//! display text shown in the terminal and written by `export`.

use crate::cgi::CgiField;

/// Header line for the 4G breakdown block.
pub const HEADER_4G: &str = "4G CGI Breakdown:";

/// Header line for the 5G breakdown block.
pub const HEADER_5G: &str = "5G CGI Breakdown:";

/// Renders a breakdown as a header line followed by one line per field.
pub fn render_breakdown(header: &str, fields: &[CgiField]) -> String {
    let mut out = String::from(header);
    for field in fields {
        out.push_str(&format!(
            "\n{}: {} (Digits: {})",
            field.label, field.value, field.digits
        ));
    }
    out
}

/// Assembles the export document: the 4G block, a blank line, the 5G block.
pub fn render_report(block_4g: &str, block_5g: &str) -> String {
    format!("{block_4g}\n\n{block_5g}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cgi::{decode_4g, decode_5g};

    #[test]
    fn test_render_breakdown_lines() {
        let fields = decode_4g("310150ABC0134F201").unwrap();
        let text = render_breakdown(HEADER_4G, &fields);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "4G CGI Breakdown:");
        assert_eq!(lines[1], "MCC: 310 (Digits: 3)");
        assert_eq!(lines[2], "MNC: 15 (Digits: 2)");
        assert_eq!(lines[3], "TAC (Hex): 0ABC (Digits: 4)");
        assert_eq!(lines[4], "TAC (Dec): 02748 (Digits: 5)");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_render_breakdown_empty_input_placeholder() {
        let fields = decode_5g("").unwrap();
        let text = render_breakdown(HEADER_5G, &fields);
        assert!(text.starts_with("5G CGI Breakdown:\nMCC: 000 (Digits: 3)"));
        assert!(text.contains("5G CGI (Dec): 0000000000000000000000 (Digits: 22)"));
    }

    #[test]
    fn test_render_report_blank_line_between_blocks() {
        let report = render_report("4G CGI Breakdown:\nMCC: 310 (Digits: 3)", "5G CGI Breakdown:");
        assert_eq!(
            report,
            "4G CGI Breakdown:\nMCC: 310 (Digits: 3)\n\n5G CGI Breakdown:\n"
        );
    }
}
