//! Interactive command parsing and dispatch.
//!
//! The session keeps the last rendered 4G and 5G breakdowns as two result
//! panes. A failed decode leaves the corresponding pane untouched.

use tracing::debug;

use cgidec_common::{decode_4g, decode_5g, render_breakdown, render_report, HEADER_4G, HEADER_5G};

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decode a 4G CGI hex string
    Decode4g { hex: String },
    /// Decode a 5G CGI hex string
    Decode5g { hex: String },
    /// Decode both at once
    DecodeBoth { hex_4g: String, hex_5g: String },
    /// Reprint the stored breakdowns
    Show,
    /// Clear both panes
    Clear,
    /// Write the report document to a file
    Export { path: Option<String> },
    /// Print command help
    Help,
    /// Leave the session
    Exit,
}

/// Response from a dispatched command.
#[derive(Debug, Clone)]
pub struct CmdResponse {
    /// Response content
    pub content: String,
    /// Whether this is an error response
    pub is_error: bool,
}

impl CmdResponse {
    /// Creates a successful response.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Creates an error response.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Parses a command line into a [`Command`].
///
/// # Supported Commands
///
/// - `4g <hex>` - decode a 4G CGI
/// - `5g <hex>` - decode a 5G CGI
/// - `decode <4g-hex> <5g-hex>` - decode both
/// - `show` - reprint the stored breakdowns
/// - `clear` - clear both panes
/// - `export [path]` - write the report to a file
/// - `help`, `exit`/`quit`
pub fn parse_command(input: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = input.trim().split_whitespace().collect();

    if tokens.is_empty() {
        return Err("Empty command".to_string());
    }

    match tokens[0].to_lowercase().as_str() {
        "4g" => {
            if tokens.len() < 2 {
                return Err("4g requires a hex CGI argument".to_string());
            }
            Ok(Command::Decode4g {
                hex: tokens[1].to_string(),
            })
        }
        "5g" => {
            if tokens.len() < 2 {
                return Err("5g requires a hex CGI argument".to_string());
            }
            Ok(Command::Decode5g {
                hex: tokens[1].to_string(),
            })
        }
        "decode" => {
            if tokens.len() < 3 {
                return Err("decode requires a 4G and a 5G hex argument".to_string());
            }
            Ok(Command::DecodeBoth {
                hex_4g: tokens[1].to_string(),
                hex_5g: tokens[2].to_string(),
            })
        }
        "show" => Ok(Command::Show),
        "clear" => Ok(Command::Clear),
        "export" => Ok(Command::Export {
            path: tokens.get(1).map(|s| s.to_string()),
        }),
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        _ => Err(format!("Unknown command: {}", tokens[0])),
    }
}

/// Session state: the last rendered 4G and 5G breakdowns.
#[derive(Debug, Default)]
pub struct DecoderSession {
    result_4g: String,
    result_5g: String,
}

impl DecoderSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a 4G CGI and stores its rendered breakdown.
    pub fn decode_4g(&mut self, hex: &str) -> CmdResponse {
        debug!("decoding 4G CGI: {hex}");
        match decode_4g(hex) {
            Ok(fields) => {
                self.result_4g = render_breakdown(HEADER_4G, &fields);
                CmdResponse::success(self.result_4g.clone())
            }
            Err(e) => CmdResponse::error(e.to_string()),
        }
    }

    /// Decodes a 5G CGI and stores its rendered breakdown.
    pub fn decode_5g(&mut self, hex: &str) -> CmdResponse {
        debug!("decoding 5G CGI: {hex}");
        match decode_5g(hex) {
            Ok(fields) => {
                self.result_5g = render_breakdown(HEADER_5G, &fields);
                CmdResponse::success(self.result_5g.clone())
            }
            Err(e) => CmdResponse::error(e.to_string()),
        }
    }

    /// Decodes both CGIs at once. Neither pane is updated unless both
    /// decodes succeed.
    pub fn decode_both(&mut self, hex_4g: &str, hex_5g: &str) -> CmdResponse {
        let fields_4g = match decode_4g(hex_4g) {
            Ok(fields) => fields,
            Err(e) => return CmdResponse::error(e.to_string()),
        };
        let fields_5g = match decode_5g(hex_5g) {
            Ok(fields) => fields,
            Err(e) => return CmdResponse::error(e.to_string()),
        };

        self.result_4g = render_breakdown(HEADER_4G, &fields_4g);
        self.result_5g = render_breakdown(HEADER_5G, &fields_5g);
        CmdResponse::success(format!("{}\n\n{}", self.result_4g, self.result_5g))
    }

    /// Reprints whatever the panes currently hold.
    pub fn show(&self) -> CmdResponse {
        if self.is_empty() {
            return CmdResponse::success("Nothing decoded yet.");
        }
        let mut blocks = Vec::new();
        if !self.result_4g.is_empty() {
            blocks.push(self.result_4g.as_str());
        }
        if !self.result_5g.is_empty() {
            blocks.push(self.result_5g.as_str());
        }
        CmdResponse::success(blocks.join("\n\n"))
    }

    /// Clears both panes.
    pub fn clear(&mut self) {
        self.result_4g.clear();
        self.result_5g.clear();
    }

    /// Returns true when neither pane holds a breakdown.
    pub fn is_empty(&self) -> bool {
        self.result_4g.is_empty() && self.result_5g.is_empty()
    }

    /// Assembles the export document from the stored panes.
    pub fn report(&self) -> String {
        render_report(&self.result_4g, &self.result_5g)
    }
}
