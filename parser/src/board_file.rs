//! Board description reader.
//!
//! The format is a small s-expression dialect, coordinates and widths in
//! millimeters:
//!
//! ```text
//! (board
//!   (net "VLED")
//!   (footprint "LED1"
//!     (pad "1" (net "VLED") (at 10.0 0.0)))
//!   (track (start 10.0 0.0) (end 10.0 2.0) (width 0.25) (layer F.Cu)))
//! ```

use thiserror::Error;

use shared::board::TrackSink;
use shared::layer::CopperLayer;
use shared::memory_board::MemoryBoard;
use shared::units::mm_to_iu;
use shared::vec2::IntVec2;

use crate::s_expr::{SExpr, parse_s_expr};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed s-expression: {0}")]
    Syntax(String),
    #[error("unexpected form: {0}")]
    Form(String),
    #[error("invalid number '{0}'")]
    Number(String),
    #[error("unknown layer '{0}'")]
    Layer(String),
}

fn form_error(message: impl Into<String>) -> ParseError {
    ParseError::Form(message.into())
}

/// Parse a board description into a [`MemoryBoard`].
pub fn parse_board(text: &str) -> Result<MemoryBoard, ParseError> {
    let root = parse_s_expr(text).map_err(ParseError::Syntax)?;
    let items = root
        .as_list()
        .ok_or_else(|| form_error("top level must be a (board ...) list"))?;
    match items.first().and_then(SExpr::as_atom) {
        Some("board") => {}
        _ => return Err(form_error("top level list must start with 'board'")),
    }

    let mut board = MemoryBoard::new();
    for item in &items[1..] {
        let fields = item
            .as_list()
            .ok_or_else(|| form_error("board items must be lists"))?;
        match fields.first().and_then(SExpr::as_atom) {
            Some("net") => board.add_net(atom_arg(fields, 1, "net name")?),
            Some("footprint") => parse_footprint(fields, &mut board)?,
            Some("track") => parse_track(fields, &mut board)?,
            Some(other) => return Err(form_error(format!("unknown board item '{other}'"))),
            None => return Err(form_error("board item without a head atom")),
        }
    }
    Ok(board)
}

fn parse_footprint(fields: &[SExpr], board: &mut MemoryBoard) -> Result<(), ParseError> {
    let reference = atom_arg(fields, 1, "footprint reference")?;
    for pad_expr in &fields[2..] {
        let pad_fields = pad_expr
            .as_list()
            .ok_or_else(|| form_error("footprint children must be (pad ...) lists"))?;
        if pad_fields.first().and_then(SExpr::as_atom) != Some("pad") {
            return Err(form_error("footprint children must be (pad ...) lists"));
        }
        let number = atom_arg(pad_fields, 1, "pad number")?;
        // a pad may be off-net; net defaults to the empty name
        let net_name = find_child(pad_fields, "net")
            .map(|child| atom_arg(child, 1, "pad net name"))
            .transpose()?
            .unwrap_or_default();
        let at = find_child(pad_fields, "at")
            .ok_or_else(|| form_error(format!("pad '{number}' is missing (at x y)")))?;
        let position = parse_point(at)?;
        board.place_pad(&reference, &number, &net_name, position);
    }
    Ok(())
}

fn parse_track(fields: &[SExpr], board: &mut MemoryBoard) -> Result<(), ParseError> {
    let start = parse_point(required_child(fields, "start")?)?;
    let end = parse_point(required_child(fields, "end")?)?;
    let width_mm = parse_mm(atom_arg(required_child(fields, "width")?, 1, "track width")?)?;
    let layer_name = atom_arg(required_child(fields, "layer")?, 1, "track layer")?;
    let layer =
        CopperLayer::from_name(&layer_name).ok_or_else(|| ParseError::Layer(layer_name))?;
    board.add_track(start, end, mm_to_iu(width_mm), layer);
    Ok(())
}

/// `(head x_mm y_mm)` to internal units.
fn parse_point(fields: &[SExpr]) -> Result<IntVec2, ParseError> {
    let x = parse_mm(atom_arg(fields, 1, "x coordinate")?)?;
    let y = parse_mm(atom_arg(fields, 2, "y coordinate")?)?;
    Ok(IntVec2::from_mm(x, y))
}

fn parse_mm(atom: String) -> Result<f64, ParseError> {
    atom.parse().map_err(|_| ParseError::Number(atom))
}

fn atom_arg(fields: &[SExpr], position: usize, what: &str) -> Result<String, ParseError> {
    fields
        .get(position)
        .and_then(SExpr::as_atom)
        .map(str::to_string)
        .ok_or_else(|| form_error(format!("missing {what}")))
}

fn find_child<'a>(fields: &'a [SExpr], head: &str) -> Option<&'a [SExpr]> {
    fields.iter().skip(1).find_map(|field| {
        let child = field.as_list()?;
        (child.first()?.as_atom()? == head).then_some(child)
    })
}

fn required_child<'a>(fields: &'a [SExpr], head: &str) -> Result<&'a [SExpr], ParseError> {
    find_child(fields, head).ok_or_else(|| form_error(format!("missing ({head} ...)")))
}
