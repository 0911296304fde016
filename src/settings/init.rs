/// Generate the starter settings written by `jumpto --init`.
///
/// The pair of rules round-trips: jumping from a source file lands on its
/// test, and jumping from the test lands back on the source.
pub fn starter_settings() -> &'static str {
	r#"{
	"src/*.js": {
		"alternate": "test/{}.test.js"
	},
	"test/*.test.js": {
		"alternate": "src/{}.js",
		"template": [
			"describe('{camelcase}', () => {open}",
			"",
			"{close});"
		]
	}
}
"#
}
