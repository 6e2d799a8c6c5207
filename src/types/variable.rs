//! The catalogue of WRF variables rendered by the observatory.

use std::fmt;

/// A WRF output variable that the backend renders as an hourly map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrfVariable {
    /// Identifier used in filenames and in the `variable` query parameter (e.g. `t2`).
    pub id: &'static str,
    /// Short display name.
    pub name: &'static str,
    /// One-line description including the unit, if any.
    pub description: &'static str,
}

/// Every WRF variable published for Córdoba, in display order.
pub static WRF_VARIABLES: [WrfVariable; 15] = [
    WrfVariable {
        id: "t2",
        name: "2 m temperature",
        description: "Air temperature 2 metres above ground (°C)",
    },
    WrfVariable {
        id: "cl",
        name: "Cloud cover",
        description: "Total cloud cover fraction",
    },
    WrfVariable {
        id: "ctt",
        name: "Cloud top temperature",
        description: "Temperature at the top of the clouds (°C)",
    },
    WrfVariable {
        id: "dbz_altura",
        name: "Reflectivity aloft",
        description: "Simulated radar reflectivity (dBZ) at several levels",
    },
    WrfVariable {
        id: "hail",
        name: "Hail",
        description: "Hail probability or intensity",
    },
    WrfVariable {
        id: "max_dbz",
        name: "Maximum reflectivity",
        description: "Column maximum simulated radar reflectivity (dBZ)",
    },
    WrfVariable {
        id: "mcape",
        name: "Maximum CAPE",
        description: "Maximum convective available potential energy (J/kg)",
    },
    WrfVariable {
        id: "ppn",
        name: "Hourly precipitation",
        description: "Instantaneous precipitation rate (mm/h)",
    },
    WrfVariable {
        id: "ppnaccum",
        name: "Accumulated precipitation",
        description: "Total precipitation since the start of the run (mm)",
    },
    WrfVariable {
        id: "rh2",
        name: "Relative humidity",
        description: "Relative humidity 2 metres above ground (%)",
    },
    WrfVariable {
        id: "riesgos_vientos",
        name: "Wind risk",
        description: "Areas at risk of strong winds or intense gusts",
    },
    WrfVariable {
        id: "snow",
        name: "Snow",
        description: "Snow accumulation or snowfall probability",
    },
    WrfVariable {
        id: "wdir10",
        name: "Wind direction",
        description: "Direction the wind blows from at 10 m (°)",
    },
    WrfVariable {
        id: "wspd10",
        name: "Wind speed",
        description: "Wind speed 10 metres above ground (m/s)",
    },
    WrfVariable {
        id: "wspd_altura",
        name: "Wind speed aloft",
        description: "Wind speed at several height levels",
    },
];

impl WrfVariable {
    /// Looks up a variable by its identifier.
    pub fn find(id: &str) -> Option<&'static WrfVariable> {
        WRF_VARIABLES.iter().find(|v| v.id == id)
    }

    /// The variable selected when nothing else is requested (`t2`).
    pub fn default_variable() -> &'static WrfVariable {
        &WRF_VARIABLES[0]
    }

    /// All known variables.
    pub fn all() -> &'static [WrfVariable] {
        &WRF_VARIABLES
    }
}

impl fmt::Display for WrfVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
