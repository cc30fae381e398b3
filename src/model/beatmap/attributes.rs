use crate::{model::mods::Mods, Beatmap};

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate
    pub hp: f64,
}

/// Specify values for this builder to get [`BeatmapAttributes`] based on
/// mods & co.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributesBuilder {
    ar: f32,
    od: f32,
    cs: f32,
    hp: f32,
    mods: u32,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    pub const fn new(map: &Beatmap) -> Self {
        Self {
            ar: map.ar,
            od: map.od,
            cs: map.cs,
            hp: map.hp,
            mods: 0,
        }
    }

    /// Specify the approach rate.
    pub fn ar(&mut self, ar: f32) -> &mut Self {
        self.ar = ar;

        self
    }

    /// Specify the overall difficulty.
    pub fn od(&mut self, od: f32) -> &mut Self {
        self.od = od;

        self
    }

    /// Specify the circle size.
    pub fn cs(&mut self, cs: f32) -> &mut Self {
        self.cs = cs;

        self
    }

    /// Specify the drain rate.
    pub fn hp(&mut self, hp: f32) -> &mut Self {
        self.hp = hp;

        self
    }

    /// Specify the mods.
    pub fn mods(&mut self, mods: u32) -> &mut Self {
        self.mods = mods;

        self
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let multiplier = self.mods.od_ar_hp_multiplier();
        let adjust = |value: f32| (f64::from(value) * multiplier).min(10.0);

        BeatmapAttributes {
            ar: adjust(self.ar),
            od: adjust(self.od),
            cs: (f64::from(self.cs) * self.mods.cs_multiplier()).min(10.0),
            hp: adjust(self.hp),
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> Beatmap {
        Beatmap {
            ar: 9.0,
            od: 8.0,
            cs: 4.0,
            hp: 6.0,
            ..Default::default()
        }
    }

    #[test]
    fn nomod() {
        let attrs = map().attributes().build();

        assert!((attrs.ar - 9.0).abs() < 1e-6);
        assert!((attrs.cs - 4.0).abs() < 1e-6);
    }

    #[test]
    fn hardrock_caps_at_ten() {
        let attrs = map().attributes().mods(u32::HR).build();

        assert!((attrs.ar - 10.0).abs() < 1e-6);
        assert!((attrs.od - 10.0).abs() < 1e-6);
        assert!((attrs.cs - 5.2).abs() < 1e-6);
        assert!((attrs.hp - 8.4).abs() < 1e-6);
    }

    #[test]
    fn easy_halves() {
        let attrs = map().attributes().mods(u32::EZ).cs(5.0).build();

        assert!((attrs.ar - 4.5).abs() < 1e-6);
        assert!((attrs.cs - 2.5).abs() < 1e-6);
    }
}
