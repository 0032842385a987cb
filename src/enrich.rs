use crate::event::{Event, EventT};

/// Fills in the fields no single variant can compute from its own payload:
/// the full event name and whether the event concerns the bot itself.
pub fn enrich(mut event: Event, full_name: String) -> Event {
    let to_me = concerns_self(&event);
    let base = event.base_mut();
    base.event_name = full_name;
    base.to_me = to_me;
    event
}

fn concerns_self(event: &Event) -> bool {
    let self_id = event.self_id();
    match event {
        Event::PrivateMessage(_) => true,
        Event::GroupMessage(e) => e.inner.message.is_addressed_to(self_id),
        // kicked
        Event::GroupDecrease(e) => e.user_id == self_id,
        Event::Poke(e) => e.target_id == self_id,
        Event::FriendAdd(_) => true,
        Event::FriendRequest(_) | Event::GroupRequest(_) => true,
        _ => false,
    }
}
