//! Secret and variable references in GitHub Actions expression syntax.

/// `secrets.<name>`, as listed to the user.
pub fn secrets_prefix(name: &str) -> String {
    format!("secrets.{}", name)
}

/// `vars.<name>`, as listed to the user.
pub fn vars_prefix(name: &str) -> String {
    format!("vars.{}", name)
}

/// `${{ secrets.<name> }}`
pub fn secret_ref(name: &str) -> String {
    format!("${{{{ {} }}}}", secrets_prefix(name))
}

/// `${{ vars.<name> }}`
pub fn variable_ref(name: &str) -> String {
    format!("${{{{ {} }}}}", vars_prefix(name))
}
