use crate::{ExecutionContext, ExecutionError};

/// Report one carried item, or list the whole inventory.
pub(super) fn scan(ctx: &mut ExecutionContext<'_>, id: Option<&str>) -> Result<(), ExecutionError> {
    let message = match id {
        Some(id) => {
            let item = ctx
                .inventory
                .get(id)
                .ok_or_else(|| ExecutionError::UnknownItem { id: id.to_owned() })?;
            format!("{}: {item}", item.id())
        }
        None if ctx.inventory.is_empty() => return Err(ExecutionError::InventoryEmpty),
        None => format!("I am carrying the following items: {}", ctx.inventory),
    };
    ctx.robot.say_something(&message);
    Ok(())
}
