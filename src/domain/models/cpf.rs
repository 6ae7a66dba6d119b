/// Stored form of a CPF: the accepted `ddd.ddd.ddd-dd` spelling with its
/// punctuation removed, so `529.982.247-25` and `52998224725` are one value.
pub fn normalize(cpf: &str) -> String {
    cpf.chars().filter(|c| !matches!(c, '.' | '-')).collect()
}
