use super::*;

impl OracleGame {
    /// True when a reveal from `group_no` would produce a card right now:
    /// the group exists, has hidden cards, and no card is in flight.
    pub fn can_reveal(&self, group_no: u8) -> bool {
        self.current_card.is_none()
            && self
                .group(group_no)
                .map(|group| !group.hidden.is_empty())
                .unwrap_or(false)
    }

    /// Pops the front hidden card of `group_no` into flight.
    ///
    /// Preconditions (the session layer enforces both before calling):
    /// no card may already be in flight and `group_no` must be 1..=13.
    pub fn reveal_from_group(&mut self, group_no: u8) -> RevealOutcome {
        assert!(
            self.current_card.is_none(),
            "reveal requested while a card is in flight"
        );
        let group = self
            .group_mut(group_no)
            .expect("group number out of range");

        if group.hidden.is_empty() {
            return RevealOutcome::EmptyGroup;
        }

        let card = group.hidden.remove(0);
        let origin_now_empty = group.hidden.is_empty();
        self.current_card = Some(card);

        let target_group = card.numeric_value();
        if target_group == group_no && origin_now_empty {
            return RevealOutcome::SameGroupDeadEnd { card };
        }

        RevealOutcome::Revealed { card, target_group }
    }

    /// Moves the in-flight card onto the revealed pile of the group
    /// matching its rank. Precondition: a card is in flight.
    pub fn place_current_card(&mut self) -> PlaceOutcome {
        let card = self
            .current_card
            .take()
            .expect("no card in flight to place");
        let target_group = card.numeric_value();
        self.group_mut(target_group)
            .expect("card rank is always a valid group")
            .revealed
            .push(card);

        if self.all_hidden_empty() {
            PlaceOutcome::Won { target_group }
        } else {
            PlaceOutcome::Placed { target_group }
        }
    }
}
