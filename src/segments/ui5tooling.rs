use crate::segments::LanguageSpec;

/// UI5 Tooling CLI (`ui5`), shown inside UI5 projects.
pub static UI5TOOLING: LanguageSpec = LanguageSpec {
    name: "ui5tooling",
    command: "ui5",
    version_param: "--version",
    version_regex: r"(?P<version>(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-(?P<prerelease>[a-z]+[0-9]*))?)",
    file_patterns: &["*ui5*.y*ml"],
};
