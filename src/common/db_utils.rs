// src/common/db_utils.rs

// Extrai o nome da constraint violada quando o erro do Postgres é de
// unicidade ou de chave estrangeira. Os repositórios usam o nome para
// traduzir o erro em resposta de domínio (409/422) em vez de 500.
pub fn violated_constraint(e: &sqlx::Error) -> Option<String> {
    match e {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() =>
        {
            db_err.constraint().map(str::to_owned)
        }
        _ => None,
    }
}
