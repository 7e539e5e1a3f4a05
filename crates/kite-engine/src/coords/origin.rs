/// Where the coordinate origin of a scene sits on the render surface.
///
/// Chosen once per [`Scene`](crate::scene::Scene) and passed explicitly to every
/// transform-matrix computation. Must not change while a frame is being rendered.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Origin {
    /// +Y grows downwards from the top-left corner.
    #[default]
    UpperLeft,
    /// +Y grows upwards from the bottom-left corner.
    LowerLeft,
}

impl Origin {
    /// Sign applied to local Y translations under this convention.
    #[inline]
    pub const fn y_sign(self) -> f64 {
        match self {
            Origin::UpperLeft => 1.0,
            Origin::LowerLeft => -1.0,
        }
    }
}
