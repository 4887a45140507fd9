// UI constants gathered here instead of scattering magic numbers across views.

/// Default project-card width in logical pixels
pub const CARD_WIDTH: f32 = 320.0;

/// Gap between cards in the grid
pub const CARD_GAP: f32 = 16.0;

/// Page avatar diameter
pub const AVATAR_SIZE: f32 = 160.0;

/// Project logo diameter inside the card header
pub const LOGO_SIZE: f32 = 32.0;

/// UI spacing constants
pub mod spacing {
    /// Small spacing (4px)
    pub const SMALL: f32 = 4.0;

    /// Medium spacing (8px)
    pub const MEDIUM: f32 = 8.0;

    /// Large spacing (16px)
    pub const LARGE: f32 = 16.0;

    /// Extra large spacing (24px)
    pub const XLARGE: f32 = 24.0;
}

/// Card-specific layout constants
pub mod card {
    /// Inner margin of the card frame (symmetric)
    pub const INNER_MARGIN: f32 = 12.0;

    /// Border radius of card corners
    pub const ROUNDING: f32 = 8.0;

    /// Gap between the card header and the description body
    pub const POST_HEADER_GAP: f32 = 8.0;

    /// Minimum height reserved for the description body so footers align
    pub const BODY_MIN_HEIGHT: f32 = 72.0;

    /// Side of the square action icon-buttons in the footer
    pub const ACTION_BUTTON_SIZE: f32 = 28.0;
}

/// Cursor highlight geometry. The visual is a radial gradient centered at
/// the pointer position projected into each card.
pub mod highlight {
    /// Gradient radius in logical pixels
    pub const RADIUS: f32 = 260.0;

    /// Triangle-fan segments approximating the gradient disc
    pub const SEGMENTS: usize = 48;

    /// Alpha of the gradient center (fades to fully transparent at the rim)
    pub const CENTER_ALPHA: u8 = 26;
}
