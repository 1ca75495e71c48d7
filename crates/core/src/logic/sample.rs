use crate::prelude::*;

/// The demonstration tree, a small JavaScript package.
///
/// ```text
/// nodejs-package            hidden: true
/// ├── Makefile
/// ├── README.md
/// ├── dist
/// ├── __tests__
/// │   └── half.test.js      type: text/javascript
/// ├── babel.config.js       type: text/javascript
/// └── node_modules          owner: root, hidden: false
///     └── @babel
///         └── cli
///             └── LICENSE
/// ```
pub fn nodejs_package() -> Result<Node> {
    let javascript = || meta([(TYPE, "text/javascript")]);
    mkdir()
        .name(DEFAULT_TARGET)
        .children(vec![
            mkfile().name("Makefile").call()?,
            mkfile().name("README.md").call()?,
            mkdir().name("dist").call()?,
            mkdir()
                .name("__tests__")
                .children(vec![
                    mkfile().name("half.test.js").meta(javascript()).call()?,
                ])
                .call()?,
            mkfile().name("babel.config.js").meta(javascript()).call()?,
            mkdir()
                .name("node_modules")
                .children(vec![
                    mkdir()
                        .name("@babel")
                        .children(vec![
                            mkdir()
                                .name("cli")
                                .children(vec![mkfile().name("LICENSE").call()?])
                                .call()?,
                        ])
                        .call()?,
                ])
                .meta(meta([(OWNER, json!("root")), (HIDDEN, json!(false))]))
                .call()?,
        ])
        .meta(meta([(HIDDEN, true)]))
        .call()
}
