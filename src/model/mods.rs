macro_rules! impl_mods {
    ($func_name:ident, $const_name:ident) => {
        #[inline]
        fn $func_name(self) -> bool {
            self & Self::$const_name > 0
        }
    };
}

/// Convenience functions for legacy mod bitflags.
///
/// # Example
///
/// ```
/// use rosu_hardrock::{model::mods::Reflection, Mods};
///
/// let mods = u32::HD | u32::HR;
///
/// assert!(mods.hr());
/// assert_eq!(mods.reflection(), Reflection::Vertical);
/// ```
pub trait Mods: Copy {
    const NM: u32 = 0;
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const DT: u32 = 1 << 6;
    const HT: u32 = 1 << 8;
    const FL: u32 = 1 << 10;
    const SO: u32 = 1 << 12;

    /// Multiplier for approach rate, overall difficulty, and drain rate.
    fn od_ar_hp_multiplier(self) -> f64;
    /// Multiplier for the circle size.
    fn cs_multiplier(self) -> f64;
    /// How the playfield is reflected.
    fn reflection(self) -> Reflection;
    /// Product of the score multipliers of all contained mods.
    fn score_multiplier(self) -> f64;
    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn td(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;
}

impl Mods for u32 {
    #[inline]
    fn od_ar_hp_multiplier(self) -> f64 {
        if self.hr() {
            1.4
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    #[inline]
    fn cs_multiplier(self) -> f64 {
        if self.hr() {
            1.3
        } else if self.ez() {
            0.5
        } else {
            1.0
        }
    }

    #[inline]
    fn reflection(self) -> Reflection {
        if self.hr() {
            Reflection::Vertical
        } else {
            Reflection::None
        }
    }

    fn score_multiplier(self) -> f64 {
        const MULTIPLIERS: [(u32, f64); 8] = [
            (u32::NF, 0.5),
            (u32::EZ, 0.5),
            (u32::HD, 1.06),
            (u32::HR, crate::osu::HardRock::SCORE_MULTIPLIER),
            (u32::DT, 1.12),
            (u32::HT, 0.3),
            (u32::FL, 1.12),
            (u32::SO, 0.9),
        ];

        MULTIPLIERS
            .iter()
            .filter(|(flag, _)| self & flag > 0)
            .map(|(_, mult)| mult)
            .product()
    }

    impl_mods!(nf, NF);
    impl_mods!(ez, EZ);
    impl_mods!(td, TD);
    impl_mods!(hd, HD);
    impl_mods!(hr, HR);
    impl_mods!(dt, DT);
    impl_mods!(ht, HT);
    impl_mods!(fl, FL);
    impl_mods!(so, SO);
}

/// Reflection of the playfield caused by mods.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Reflection {
    #[default]
    None,
    /// Flip along the horizontal center line i.e. y-coordinates change.
    Vertical,
}
