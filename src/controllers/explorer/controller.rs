use crate::controllers::explorer::config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::controllers::explorer::ports::{FrameSinkPort, KeySourcePort};
use crate::core::actions::render_frame::glyph_mapping::factory::glyph_mapper_factory;
use crate::core::actions::render_frame::glyph_mapping::mapper::GlyphMapper;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::screen_buffer::ScreenBuffer;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use crate::core::viewport::Viewport;
use crate::input::keymap::{Command, command_for_key};

pub struct ExplorerController<S, K> {
    viewport: Viewport,
    escape: EscapeTime,
    mapper: Box<dyn GlyphMapper>,
    frame: ScreenBuffer,
    sink: S,
    keys: K,
}

impl<S: FrameSinkPort, K: KeySourcePort> ExplorerController<S, K> {
    /// `rows`/`cols` is the terminal size probed once at startup; the
    /// explorer never reacts to later resizes.
    pub fn new(
        config: ExplorerConfig,
        rows: u16,
        cols: u16,
        sink: S,
        keys: K,
    ) -> Result<Self, ExplorerError> {
        let viewport = Viewport::new(config.center, config.extents, rows, cols)?;
        let escape = EscapeTime::new(config.iteration_budget)?;
        let frame = ScreenBuffer::new(viewport.rows(), viewport.cols());

        log::info!(
            "exploring {}x{} cells around ({}, {})",
            viewport.rows(),
            viewport.cols(),
            config.center.re,
            config.center.im,
        );

        Ok(Self {
            viewport,
            escape,
            mapper: glyph_mapper_factory(config.glyph_map),
            frame,
            sink,
            keys,
        })
    }

    /// Render, present, block on one keystroke, mutate the view, repeat.
    /// A frame always runs to completion; no input is read mid-frame.
    pub fn run(&mut self) -> Result<(), ExplorerError> {
        loop {
            render_frame(
                &self.viewport,
                &self.escape,
                self.mapper.as_ref(),
                &mut self.frame,
            );
            self.sink.present(&self.frame, self.viewport.center_cell())?;

            let key = self.keys.next_key()?;
            let Some(command) = command_for_key(key) else {
                continue;
            };
            log::debug!("key {:?} -> {:?}", key, command);

            match command {
                Command::Quit => return Ok(()),
                Command::Shift { direction, cells } => self.viewport.shift(direction, cells),
                Command::Zoom { zoom, steps } => {
                    for _ in 0..steps {
                        self.viewport.zoom(zoom);
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ScriptedKeys {
        keys: Vec<char>,
        next: usize,
    }

    impl ScriptedKeys {
        fn new(script: &str) -> Self {
            Self {
                keys: script.chars().collect(),
                next: 0,
            }
        }
    }

    impl KeySourcePort for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<char> {
            let key = self.keys.get(self.next).copied().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
            })?;
            self.next += 1;
            Ok(key)
        }
    }

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
        last_len: usize,
        last_cursor: (u16, u16),
    }

    impl FrameSinkPort for CountingSink {
        fn present(&mut self, frame: &ScreenBuffer, cursor: (u16, u16)) -> io::Result<()> {
            self.frames += 1;
            self.last_len = frame.len();
            self.last_cursor = cursor;
            Ok(())
        }
    }

    // small grid keeps the escape loop cheap in tests
    fn controller(script: &str) -> ExplorerController<CountingSink, ScriptedKeys> {
        ExplorerController::new(
            ExplorerConfig::default(),
            5,
            9,
            CountingSink::default(),
            ScriptedKeys::new(script),
        )
        .unwrap()
    }

    #[test]
    fn quits_on_q_after_presenting_one_frame() {
        let mut controller = controller("q");

        controller.run().unwrap();

        assert_eq!(controller.sink.frames, 1);
    }

    #[test]
    fn presents_one_frame_per_loop_iteration() {
        let mut controller = controller("llq");

        controller.run().unwrap();

        assert_eq!(controller.sink.frames, 3);
    }

    #[test]
    fn cursor_is_parked_on_the_center_cell() {
        let mut controller = controller("q");

        controller.run().unwrap();

        assert_eq!(controller.sink.last_cursor, (2, 4));
    }

    #[test]
    fn pan_key_moves_the_center_by_one_cell() {
        let mut controller = controller("lq");
        let cell_x = controller.viewport().cell_size().x;

        controller.run().unwrap();

        assert_eq!(controller.viewport().center().re, -0.5 + cell_x);
    }

    #[test]
    fn coarse_pan_key_moves_the_center_by_five_cells() {
        let mut controller = controller("Kq");
        let cell_y = controller.viewport().cell_size().y;

        controller.run().unwrap();

        assert_eq!(controller.viewport().center().im, 5.0 * cell_y);
    }

    #[test]
    fn zoom_key_scales_the_extents_by_one_step() {
        let mut controller = controller("iq");
        let before = controller.viewport().extents();

        controller.run().unwrap();

        assert!((controller.viewport().extents().y - before.y * 0.95).abs() < 1e-12);
    }

    #[test]
    fn double_zoom_key_applies_two_steps() {
        let mut controller = controller("Iq");
        let before = controller.viewport().extents();

        controller.run().unwrap();

        assert!((controller.viewport().extents().y - before.y * 0.95 * 0.95).abs() < 1e-12);
    }

    #[test]
    fn unmapped_key_re_renders_without_mutating_the_view() {
        let mut controller = controller("xq");
        let viewport_before = *controller.viewport();

        controller.run().unwrap();

        assert_eq!(controller.sink.frames, 2);
        assert_eq!(*controller.viewport(), viewport_before);
    }

    #[test]
    fn io_failure_from_the_key_source_propagates() {
        // empty script reports EOF as an i/o error
        let mut controller = controller("");

        let result = controller.run();

        assert!(matches!(result, Err(ExplorerError::Io(_))));
    }
}
