/// Tunable switches and limits for the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched below the root
    pub depth: u32,
    /// Search one ply deeper when the side to move starts in check
    pub check_extension: bool,
    /// Return a mate-in-one immediately without a full search
    pub mate_shortcut: bool,
    /// Skip moves that leave the opponent stalemated
    pub avoid_stalemate: bool,
}

pub const DEFAULT_DEPTH: u32 = 4;

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            check_extension: true,
            mate_shortcut: true,
            avoid_stalemate: true,
        }
    }
}
