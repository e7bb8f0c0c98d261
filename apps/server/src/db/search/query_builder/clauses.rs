//! SQL fragments for individual predicates.

use super::bind::{push_bigint, push_text, push_text_array};
use super::BindValue;
use crate::db::search::predicate::Predicate;

pub(super) fn build_predicate_clause(
    predicate: &Predicate,
    bind_params: &mut Vec<BindValue>,
) -> String {
    match predicate {
        Predicate::Active => "e.active = true".to_string(),
        Predicate::HasPayrollId => "e.payroll_id IS NOT NULL".to_string(),
        Predicate::StateId(id) => id_clause("s.id", *id, bind_params),
        Predicate::CityId(id) => id_clause("ci.id", *id, bind_params),
        Predicate::CampusId(id) => id_clause("c.id", *id, bind_params),
        Predicate::DepartmentId(id) => id_clause("d.id", *id, bind_params),
        Predicate::EmployeeTypeId(id) => id_clause("et.id", *id, bind_params),
        Predicate::CategoryName(name) => {
            let idx = push_text(bind_params, name.clone());
            format!("lower(cc.name) = lower(${})", idx)
        }
        Predicate::PayrollIdIn(tokens) => {
            let idx = push_text_array(bind_params, tokens.clone());
            format!("e.payroll_id = ANY(${})", idx)
        }
        Predicate::IdentifierOrName(token) => {
            // strpos instead of LIKE so that % and _ in the token stay literal.
            let idx = push_text(bind_params, token.clone());
            format!(
                "(e.payroll_id = ${idx} \
                 OR strpos(lower(COALESCE(e.first_name, '')), lower(${idx})) > 0 \
                 OR strpos(lower(COALESCE(e.last_name, '')), lower(${idx})) > 0 \
                 OR strpos(lower(COALESCE(e.first_name, '') || ' ' || COALESCE(e.last_name, '')), lower(${idx})) > 0)"
            )
        }
    }
}

fn id_clause(column: &str, id: i64, bind_params: &mut Vec<BindValue>) -> String {
    let idx = push_bigint(bind_params, id);
    format!("{} = ${}", column, idx)
}
