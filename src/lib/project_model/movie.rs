use std::borrow::Cow;

pub const DEFAULT_SWF_VERSION: &str = "11.4";
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// The `.swf` properties, already resolved against their defaults
#[derive(Debug, PartialEq, Eq)]
pub struct MovieModel<'a> {
    pub version: Cow<'a, str>,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub background: Cow<'a, str>,
}

impl<'a> Default for MovieModel<'a> {
    fn default() -> Self {
        Self {
            version: Cow::Borrowed(DEFAULT_SWF_VERSION),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            background: Cow::Borrowed(DEFAULT_BACKGROUND),
        }
    }
}
