use crate::segments::LanguageSpec;

/// Node.js runtime, shown next to JavaScript and TypeScript sources.
pub static NODE: LanguageSpec = LanguageSpec {
    name: "node",
    command: "node",
    version_param: "--version",
    version_regex: r"v?(?P<version>(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:-(?P<prerelease>[a-z]+[0-9]*))?)",
    file_patterns: &["*.js", "*.ts", "package.json"],
};
