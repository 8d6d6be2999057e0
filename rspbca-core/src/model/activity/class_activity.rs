use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// travel activity of one vehicle class on a link, or summed over many links.
/// person measures are zero for classes that do not carry an occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassActivity {
    /// vehicles
    pub volume: f64,
    pub vmt: f64,
    pub vht: f64,
    pub cvmt: f64,
    pub cvht: f64,
    pub pmt: f64,
    pub cpmt: f64,
    pub pht: f64,
    pub cpht: f64,
}

impl ClassActivity {
    /// activity of `volume` vehicles carrying `occupancy` persons each over
    /// `length_miles` at `mph`. hours are zero when the speed is not positive.
    pub fn new(
        volume: f64,
        length_miles: f64,
        mph: f64,
        congested: bool,
        occupancy: Option<f64>,
    ) -> ClassActivity {
        let hours = |miles: f64| if mph > 0.0 { miles / mph } else { 0.0 };
        let factor = if congested { 1.0 } else { 0.0 };
        let vmt = volume * length_miles;
        let vht = hours(vmt);
        let (pmt, pht) = match occupancy {
            Some(occ) => {
                let pmt = volume * occ * length_miles;
                (pmt, hours(pmt))
            }
            None => (0.0, 0.0),
        };
        ClassActivity {
            volume,
            vmt,
            vht,
            cvmt: vmt * factor,
            cvht: vht * factor,
            pmt,
            cpmt: pmt * factor,
            pht,
            cpht: pht * factor,
        }
    }
}

impl AddAssign<&ClassActivity> for ClassActivity {
    fn add_assign(&mut self, rhs: &ClassActivity) {
        self.volume += rhs.volume;
        self.vmt += rhs.vmt;
        self.vht += rhs.vht;
        self.cvmt += rhs.cvmt;
        self.cvht += rhs.cvht;
        self.pmt += rhs.pmt;
        self.cpmt += rhs.cpmt;
        self.pht += rhs.pht;
        self.cpht += rhs.cpht;
    }
}

impl Add for ClassActivity {
    type Output = ClassActivity;

    fn add(mut self, rhs: ClassActivity) -> Self::Output {
        self += &rhs;
        self
    }
}
