/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Generation of the load whose results are currently accepted.
    pub generation: u64,

    /// Slides downloaded so far for the current generation.
    pub slides_settled: usize,

    /// Start of an in-progress primary-button drag over the track.
    pub drag_start_x: Option<f32>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn reset_for(&mut self, generation: u64) {
        self.generation = generation;
        self.slides_settled = 0;
        self.drag_start_x = None;
    }
}
