//! Plain-text rendering backend.
//!
//! Draws a frame's memory snapshot as a single proportional bar of labelled
//! cells, the terminal stand-in for the canvas renderer of a graphical
//! frontend. The drawing function is pure: the same snapshot, highlight, and
//! width always produce the same line, and the renderer keeps the last
//! snapshot so a width change can redraw without re-running the simulation.

use memsim_core::render::Render;
use memsim_core::sim::FrameState;

/// Renders frames as one proportional text bar per call.
#[derive(Debug)]
pub struct TextRenderer {
    width: usize,
    last: Option<(FrameState, Option<String>)>,
}

impl TextRenderer {
    /// Creates a renderer drawing bars of `width` characters.
    pub fn new(width: usize) -> Self {
        Self { width, last: None }
    }

    /// Changes the bar width and redraws the last snapshot, if any.
    pub fn resize(&mut self, width: usize) {
        self.width = width;
        if let Some((state, active)) = self.last.clone() {
            self.render(&state, active.as_deref());
        }
    }

    /// Draws a snapshot into a string. Pure: depends only on the arguments.
    pub fn draw(state: &FrameState, active: Option<&str>, width: usize) -> String {
        let cells = match state {
            FrameState::Dynamic { memory } => memory
                .segments()
                .iter()
                .map(|seg| {
                    let label = seg.owner.as_ref().map_or_else(
                        || format!("Hole ({}KB)", seg.size),
                        |owner| format!("{owner} ({}KB)", seg.size),
                    );
                    let highlight = seg.owner.as_deref() == active && active.is_some();
                    (label, seg.size, highlight)
                })
                .collect::<Vec<_>>(),
            FrameState::Fixed {
                partitions,
                allocations,
            } => partitions
                .iter()
                .map(|part| {
                    let alloc = allocations
                        .iter()
                        .find(|alloc| alloc.partition_id == part.id);
                    let label = alloc.map_or_else(
                        || format!("{}: Free ({}KB)", part.id, part.size),
                        |alloc| {
                            format!(
                                "{}: {} ({}KB/{}KB)",
                                part.id, alloc.owner, alloc.owner_size, part.size
                            )
                        },
                    );
                    let highlight =
                        alloc.map(|alloc| alloc.owner.as_str()) == active && active.is_some();
                    (label, part.size, highlight)
                })
                .collect::<Vec<_>>(),
        };

        let total: u64 = cells.iter().map(|(_, size, _)| *size).sum();
        if total == 0 {
            return String::from("||");
        }

        let mut bar = String::from("|");
        for (label, size, highlight) in cells {
            let cell_width = (((size as f64) / (total as f64)) * (width as f64)).round() as usize;
            let cell_width = cell_width.max(1);
            let text = if highlight {
                format!("[{label}]")
            } else {
                label
            };
            let mut cell: String = text.chars().take(cell_width).collect();
            while cell.chars().count() < cell_width {
                cell.push(' ');
            }
            bar.push_str(&cell);
            bar.push('|');
        }
        bar
    }
}

impl Render for TextRenderer {
    fn render(&mut self, state: &FrameState, active: Option<&str>) {
        self.last = Some((state.clone(), active.map(str::to_string)));
        println!("{}", Self::draw(state, active, self.width));
    }
}
