// src/criteria/text.rs
//! Built-in titles, descriptions and remediation hints, keyed by codename.

pub const COMPLETE_MEDIATION: &str = "COMPLETE_MEDIATION";
pub const ECONOMY_OF_MECHANISM: &str = "ECONOMY_OF_MECHANISM";
pub const SEPARATION_OF_PRIVILEGES: &str = "SEPARATION_OF_PRIVILEGES";
pub const LEAST_PRIVILEGES: &str = "LEAST_PRIVILEGES";
pub const LEAST_COMMON_MECHANISM: &str = "LEAST_COMMON_MECHANISM";
pub const LAYERED_ARCHITECTURE: &str = "LAYERED_ARCHITECTURE";
pub const OPEN_DESIGN: &str = "OPEN_DESIGN";
pub const CODE_CLEAN: &str = "CODE_CLEAN";

/// Static text attached to a criterion.
#[derive(Debug, Clone, Copy)]
pub struct CriterionText {
    pub title: &'static str,
    pub description: &'static str,
    pub hint: &'static str,
}

#[must_use]
pub fn lookup(codename: &str) -> Option<CriterionText> {
    let text = match codename {
        COMPLETE_MEDIATION => CriterionText {
            title: "Complete Mediation",
            description: "Every access between entities goes through the expected \
                          channel: application modules talk to each other through a \
                          broker, libraries never reach up into application code and \
                          data depends on nothing but the framework.",
            hint: "Remove the dependencies or deviate them through a broker module.",
        },
        ECONOMY_OF_MECHANISM => CriterionText {
            title: "Economy Of Mechanism",
            description: "The number of dependencies between entities stays below the \
                          number of entities multiplied by a simplicity factor. \
                          Dependencies to the framework are not considered.",
            hint: "Reduce the number of dependencies in your own code \
                   or increase the simplicity factor.",
        },
        SEPARATION_OF_PRIVILEGES => CriterionText {
            title: "Separation Of Privileges",
            description: "Privileged operations require more than one condition to be \
                          met before they are granted.",
            hint: "",
        },
        LEAST_PRIVILEGES => CriterionText {
            title: "Least Privileges",
            description: "Every entity operates with the smallest set of privileges \
                          needed to do its job.",
            hint: "",
        },
        LEAST_COMMON_MECHANISM => CriterionText {
            title: "Least Common Mechanism",
            description: "No entity other than a broker or an application library is \
                          depended upon by more than the number of entities divided by \
                          an independence factor.",
            hint: "Reduce number of modules having dependencies to the listed module.",
        },
        LAYERED_ARCHITECTURE => CriterionText {
            title: "Layered Architecture",
            description: "Entities are ordered from the lowest layer to the highest and \
                          no entity depends on a later one from another package, except \
                          through a broker.",
            hint: "Ensure that your applications are listed in the right \
                   order when building the DSM, or remove dependencies.",
        },
        OPEN_DESIGN => CriterionText {
            title: "Open Design",
            description: "The security of the design does not depend on its secrecy.",
            hint: "",
        },
        CODE_CLEAN => CriterionText {
            title: "Code Clean",
            description: "The code base is free of lint and complexity issues.",
            hint: "",
        },
        _ => return None,
    };
    Some(text)
}
