//! Conjunctive, fail-closed evaluation of a redemption against a delegation.

use alloy_primitives::Address;
use caveat_types::{Delegation, ProposedCall};
use tracing::{debug, info};

use crate::{
    enforcers::enforce,
    errors::RedemptionError,
    verdict::{Rejection, Verdict},
};

/// Evaluate every call against every caveat, in order.
///
/// Stops at the first violation: the verdict names the earliest call and,
/// within it, the earliest caveat that refused. A call's inner calls are not
/// inspected. An empty redemption is admitted.
///
/// The admit/reject outcome does not depend on caveat order, but the reported
/// caveat does. Compiled delegations lead with `AllowedTargets`, so an
/// unlisted target is always reported as a target violation; a hand-built or
/// decoded delegation with another caveat first reports that caveat instead.
pub fn evaluate(delegation: &Delegation, calls: &[ProposedCall]) -> Verdict {
    for (call_index, call) in calls.iter().enumerate() {
        for caveat in delegation.caveats() {
            if let Err(violation) = enforce(caveat, call) {
                info!(
                    scope = delegation.scope_label(),
                    call_index,
                    caveat = %caveat.kind(),
                    %violation,
                    "redemption rejected"
                );
                return Verdict::Reject(Rejection {
                    call_index,
                    violated_caveat: caveat.kind(),
                    violation,
                });
            }
            debug!(call_index, caveat = %caveat.kind(), "caveat passed");
        }
    }
    info!(
        scope = delegation.scope_label(),
        calls = calls.len(),
        "redemption admitted"
    );
    Verdict::Admit
}

/// [`evaluate`], after checking that `caller` is the delegatee.
pub fn authorize(
    delegation: &Delegation,
    caller: Address,
    calls: &[ProposedCall],
) -> Result<Verdict, RedemptionError> {
    if caller != delegation.delegatee() {
        return Err(RedemptionError::NotDelegatee {
            caller,
            delegatee: delegation.delegatee(),
        });
    }
    Ok(evaluate(delegation, calls))
}
