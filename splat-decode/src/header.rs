use crate::error::{DecodeError, Result};

const END_HEADER: &str = "end_header";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyProperty {
    pub data_type: String,
    pub name: String,
}

/// Textual header of a splat ply file.
///
/// Only `element vertex` and the `end_header` line are required, the rest is kept
/// around for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyHeader {
    /// Byte offset right after the newline terminating the `end_header` line.
    pub header_len: usize,
    pub vertex_count: usize,
    pub format: Option<String>,
    pub comments: Vec<String>,
    pub vertex_properties: Vec<PlyProperty>,
}

impl PlyHeader {
    /// Whether the vertex element declares the 14 float properties this decoder reads.
    pub fn has_splat_layout(&self) -> bool {
        self.vertex_properties.len() == crate::record::RECORD_FIELDS
            && self
                .vertex_properties
                .iter()
                .all(|p| matches!(p.data_type.as_str(), "float" | "float32"))
    }
}

/// Walks the buffer line by line until a line reading exactly `end_header`.
pub fn scan_header(data: &[u8]) -> Result<PlyHeader> {
    let mut offset = 0;
    let mut vertex_count = None;
    let mut format = None;
    let mut comments = vec![];
    let mut vertex_properties = vec![];
    let mut in_vertex_element = false;

    loop {
        let Some(newline) = data[offset..].iter().position(|&b| b == b'\n') else {
            return Err(DecodeError::MalformedHeader("no 'end_header' line found"));
        };
        let line_end = offset + newline + 1;
        let line = std::str::from_utf8(&data[offset..offset + newline])
            .map_err(|_| DecodeError::MalformedHeader("header is not valid text"))?
            .trim();
        offset = line_end;

        if line == END_HEADER {
            break;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("format") => format = Some(tokens.collect::<Vec<_>>().join(" ")),
            Some("comment") => {
                comments.push(line["comment".len()..].trim_start().to_string());
            }
            Some("element") => {
                let is_vertex = tokens.next() == Some("vertex");
                // Only the first vertex element counts.
                in_vertex_element = is_vertex && vertex_count.is_none();
                if in_vertex_element {
                    vertex_count = Some(parse_vertex_count(line, tokens.next())?);
                }
            }
            Some("property") if in_vertex_element => {
                let rest: Vec<_> = tokens.collect();
                if let Some((name, data_type)) = rest.split_last() {
                    vertex_properties.push(PlyProperty {
                        data_type: data_type.join(" "),
                        name: name.to_string(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(PlyHeader {
        header_len: offset,
        vertex_count: vertex_count.ok_or(DecodeError::MissingVertexCount)?,
        format,
        comments,
        vertex_properties,
    })
}

fn parse_vertex_count(line: &str, token: Option<&str>) -> Result<usize> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| DecodeError::InvalidVertexCount(line.to_string()))
}
